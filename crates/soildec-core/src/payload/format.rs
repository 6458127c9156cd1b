use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::layout::{self, FormatLayout};

/// Payload variant selected by the caller; there is no auto-detection.
///
/// # Examples
/// ```
/// use soildec_core::PayloadFormat;
///
/// let format: PayloadFormat = "extended".parse().unwrap();
/// assert_eq!(format.min_len(), 16);
/// assert_eq!(format.to_string(), "extended");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadFormat {
    /// 12 hex characters: header, voltage, temperature, soil.
    Legacy,
    /// 16 hex characters: header, voltage, soil/core temperature, moisture.
    Extended,
}

impl PayloadFormat {
    pub const ALL: [PayloadFormat; 2] = [PayloadFormat::Legacy, PayloadFormat::Extended];

    pub fn layout(self) -> &'static FormatLayout {
        match self {
            PayloadFormat::Legacy => &layout::LEGACY_LAYOUT,
            PayloadFormat::Extended => &layout::EXTENDED_LAYOUT,
        }
    }

    /// Minimum payload length in hex characters.
    pub fn min_len(self) -> usize {
        self.layout().min_len
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PayloadFormat::Legacy => "legacy",
            PayloadFormat::Extended => "extended",
        }
    }
}

impl fmt::Display for PayloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown payload format '{0}' (expected 'legacy' or 'extended')")]
pub struct UnknownFormat(pub String);

impl FromStr for PayloadFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PayloadFormat::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Legacy".parse::<PayloadFormat>(), Ok(PayloadFormat::Legacy));
        assert_eq!(
            "EXTENDED".parse::<PayloadFormat>(),
            Ok(PayloadFormat::Extended)
        );
    }

    #[test]
    fn parse_unknown_format() {
        let err = "v3".parse::<PayloadFormat>().unwrap_err();
        assert!(err.to_string().contains("unknown payload format 'v3'"));
    }

    #[test]
    fn layout_matches_format() {
        for format in PayloadFormat::ALL {
            assert_eq!(format.layout().format, format);
        }
        assert_eq!(PayloadFormat::Legacy.min_len(), 12);
        assert_eq!(PayloadFormat::Extended.min_len(), 16);
    }
}
