//! soildec core library for soil sensor telemetry payloads.
//!
//! This crate decodes the hex payload a soil sensor node sends over LoRa
//! into a labeled record: event header, battery voltage, temperatures and
//! soil moisture. Decoding is table-driven (layout/reader/parser) and side
//! effect free; rendering and argument handling live in the CLI.
//!
//! Invariants:
//! - A record always carries every field of its format, in table order.
//! - A field whose presence test hits the all-`f` sentinel is `None`, never 0.
//! - Readings keep their raw integer; `f64` values are derived on demand.
//!
//! # Examples
//! ```
//! use soildec_core::{Header, PayloadFormat, decode};
//!
//! let record = decode(PayloadFormat::Legacy, "012000e500e7")?;
//! assert_eq!(record.header(), Header::Update);
//! assert_eq!(record.value("voltage"), Some(3.2));
//! assert_eq!(record.value("soil"), Some(22.9));
//! # Ok::<(), soildec_core::DecodeError>(())
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};

pub mod payload;

pub use payload::{
    DecodeError, Header, PayloadFormat, Scale, SentinelMode, decode, decode_bytes,
    decode_with_mode,
};

/// Fixed-point sensor reading: the raw unsigned field value and its scale.
///
/// # Examples
/// ```
/// use soildec_core::{Reading, Scale};
///
/// let reading = Reading::new(229, Scale::Tenths);
/// assert_eq!(reading.raw(), 229);
/// assert_eq!(reading.value(), 22.9);
/// assert_eq!(reading.to_string(), "22.9");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    raw: u16,
    scale: Scale,
}

impl Reading {
    pub fn new(raw: u16, scale: Scale) -> Self {
        Self { raw, scale }
    }

    pub fn raw(&self) -> u16 {
        self.raw
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Physical value; `raw / divisor` in `f64`, rounded to nearest.
    pub fn value(&self) -> f64 {
        f64::from(self.raw) / f64::from(self.scale.divisor())
    }
}

impl std::fmt::Display for Reading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.scale {
            Scale::Raw => write!(f, "{}", self.raw),
            Scale::Tenths => write!(f, "{:.1}", self.value()),
        }
    }
}

impl Serialize for Reading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.scale {
            Scale::Raw => serializer.serialize_u16(self.raw),
            Scale::Tenths => serializer.serialize_f64(self.value()),
        }
    }
}

/// One decoded numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldReading {
    /// Record key (e.g., `soil_temperature`).
    pub name: &'static str,
    /// Display label (e.g., `Soil Temperature`).
    pub label: &'static str,
    /// `None` when the sensor did not report a value.
    pub reading: Option<Reading>,
}

impl FieldReading {
    pub fn value(&self) -> Option<f64> {
        self.reading.map(|reading| reading.value())
    }
}

/// Result of a single decode call. Immutable once built.
///
/// Serializes as an ordered map: `header` first, then every field of the
/// format in declaration order, `null` for absent readings.
///
/// # Examples
/// ```
/// use soildec_core::{PayloadFormat, decode};
///
/// let record = decode(PayloadFormat::Extended, "021e00c80032ffff")?;
/// let names: Vec<_> = record.fields().iter().map(|f| f.name).collect();
/// assert_eq!(
///     names,
///     ["voltage", "soil_temperature", "soil_moisture", "core_temperature"]
/// );
/// assert_eq!(record.value("core_temperature"), None);
/// # Ok::<(), soildec_core::DecodeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRecord {
    format: PayloadFormat,
    header: Header,
    fields: Vec<FieldReading>,
}

impl DecodedRecord {
    pub(crate) fn new(format: PayloadFormat, header: Header, fields: Vec<FieldReading>) -> Self {
        Self {
            format,
            header,
            fields,
        }
    }

    pub fn format(&self) -> PayloadFormat {
        self.format
    }

    pub fn header(&self) -> Header {
        self.header
    }

    /// Numeric fields in declaration order.
    pub fn fields(&self) -> &[FieldReading] {
        &self.fields
    }

    /// Field by record key, `None` if the format has no such field.
    pub fn get(&self, name: &str) -> Option<&FieldReading> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Physical value by record key, `None` if unknown or absent.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(FieldReading::value)
    }
}

impl Serialize for DecodedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry("header", &self.header)?;
        for field in &self.fields {
            map.serialize_entry(field.name, &field.reading)?;
        }
        map.end()
    }
}
