use std::ops::Range;

use super::format::PayloadFormat;

pub const HEADER_RANGE: Range<usize> = 0..2;
pub const VOLTAGE_RANGE: Range<usize> = 2..4;

pub const LEGACY_TEMPERATURE_RANGE: Range<usize> = 4..6;
pub const LEGACY_SOIL_RANGE: Range<usize> = 6..8;
pub const LEGACY_MIN_LEN: usize = 12;

pub const SOIL_TEMPERATURE_RANGE: Range<usize> = 4..8;
pub const SOIL_MOISTURE_RANGE: Range<usize> = 8..12;
pub const CORE_TEMPERATURE_RANGE: Range<usize> = 12..16;
pub const EXTENDED_MIN_LEN: usize = 16;

/// Hex digit repeated across a field's width when the sensor was not read.
pub const SENTINEL_DIGIT: u8 = b'f';

/// Fixed divisor applied to a raw field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// Raw integer passthrough (÷1).
    Raw,
    /// Tenths of a unit (÷10).
    Tenths,
}

impl Scale {
    pub const fn divisor(self) -> u16 {
        match self {
            Scale::Raw => 1,
            Scale::Tenths => 10,
        }
    }
}

/// Which bytes decide whether a field is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presence {
    /// The field's own bytes are compared against the sentinel.
    OwnSentinel,
    /// Another field's bytes are compared against the sentinel.
    KeyedTo(Range<usize>),
}

/// How `Presence::KeyedTo` entries are honoured.
///
/// Legacy payloads tie `temperature` and `soil` to the voltage byte. That
/// coupling is almost certainly a defect in the deployed decoders, but
/// recorded telemetry was interpreted with it, so it stays the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SentinelMode {
    /// Reproduce the table as written, cross-field keys included.
    #[default]
    Faithful,
    /// Every field tests its own bytes.
    Corrected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Record key.
    pub name: &'static str,
    /// Human-readable label used by renderers.
    pub label: &'static str,
    /// Hex-character range (2 characters per byte).
    pub range: Range<usize>,
    pub presence: Presence,
    pub scale: Scale,
}

impl FieldSpec {
    /// Range whose bytes are tested against the sentinel under `mode`.
    pub fn presence_range(&self, mode: SentinelMode) -> Range<usize> {
        match (&self.presence, mode) {
            (Presence::KeyedTo(range), SentinelMode::Faithful) => range.clone(),
            _ => self.range.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatLayout {
    pub format: PayloadFormat,
    /// Minimum payload length in hex characters.
    pub min_len: usize,
    /// Numeric fields in declaration order (the header is implicit).
    pub fields: &'static [FieldSpec],
}

pub const HEADER_LABEL: &str = "Header";

pub const LEGACY_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "voltage",
        label: "Voltage",
        range: VOLTAGE_RANGE,
        presence: Presence::OwnSentinel,
        scale: Scale::Tenths,
    },
    FieldSpec {
        name: "temperature",
        label: "Temperature",
        range: LEGACY_TEMPERATURE_RANGE,
        presence: Presence::KeyedTo(VOLTAGE_RANGE),
        scale: Scale::Tenths,
    },
    FieldSpec {
        name: "soil",
        label: "Soil Moisture",
        range: LEGACY_SOIL_RANGE,
        presence: Presence::KeyedTo(VOLTAGE_RANGE),
        scale: Scale::Tenths,
    },
];

pub const EXTENDED_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "voltage",
        label: "Voltage",
        range: VOLTAGE_RANGE,
        presence: Presence::OwnSentinel,
        scale: Scale::Tenths,
    },
    FieldSpec {
        name: "soil_temperature",
        label: "Soil Temperature",
        range: SOIL_TEMPERATURE_RANGE,
        presence: Presence::OwnSentinel,
        scale: Scale::Tenths,
    },
    FieldSpec {
        name: "soil_moisture",
        label: "Soil Moisture",
        range: SOIL_MOISTURE_RANGE,
        presence: Presence::OwnSentinel,
        scale: Scale::Raw,
    },
    FieldSpec {
        name: "core_temperature",
        label: "Core Temperature",
        range: CORE_TEMPERATURE_RANGE,
        presence: Presence::OwnSentinel,
        scale: Scale::Tenths,
    },
];

pub static LEGACY_LAYOUT: FormatLayout = FormatLayout {
    format: PayloadFormat::Legacy,
    min_len: LEGACY_MIN_LEN,
    fields: LEGACY_FIELDS,
};

pub static EXTENDED_LAYOUT: FormatLayout = FormatLayout {
    format: PayloadFormat::Extended,
    min_len: EXTENDED_MIN_LEN,
    fields: EXTENDED_FIELDS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_fit_within_min_len() {
        for layout in [&LEGACY_LAYOUT, &EXTENDED_LAYOUT] {
            assert!(HEADER_RANGE.end <= layout.min_len);
            for field in layout.fields {
                assert!(field.range.end <= layout.min_len, "{}", field.name);
                assert_eq!(field.range.len() % 2, 0, "{}", field.name);
            }
        }
    }

    #[test]
    fn legacy_keys_follow_mode() {
        let temperature = &LEGACY_FIELDS[1];
        assert_eq!(
            temperature.presence_range(SentinelMode::Faithful),
            VOLTAGE_RANGE
        );
        assert_eq!(
            temperature.presence_range(SentinelMode::Corrected),
            LEGACY_TEMPERATURE_RANGE
        );
    }

    #[test]
    fn extended_fields_use_own_sentinel() {
        for field in EXTENDED_FIELDS {
            assert_eq!(field.presence, Presence::OwnSentinel);
            assert_eq!(field.presence_range(SentinelMode::Faithful), field.range);
        }
    }
}
