use std::fmt;

use serde::Serialize;

use super::error::DecodeError;

/// Event that caused the node to transmit, carried in the first byte.
///
/// # Examples
/// ```
/// use soildec_core::Header;
///
/// let header = Header::try_from(0x02).unwrap();
/// assert_eq!(header, Header::ButtonClick);
/// assert_eq!(header.label(), "BUTTON_CLICK");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Header {
    Boot = 0x00,
    Update = 0x01,
    ButtonClick = 0x02,
    ButtonHold = 0x03,
}

impl Header {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Header::Boot => "BOOT",
            Header::Update => "UPDATE",
            Header::ButtonClick => "BUTTON_CLICK",
            Header::ButtonHold => "BUTTON_HOLD",
        }
    }
}

impl TryFrom<u8> for Header {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(Header::Boot),
            0x01 => Ok(Header::Update),
            0x02 => Ok(Header::ButtonClick),
            0x03 => Ok(Header::ButtonHold),
            _ => Err(DecodeError::UnknownHeader { code: value }),
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_round_trip() {
        for header in [
            Header::Boot,
            Header::Update,
            Header::ButtonClick,
            Header::ButtonHold,
        ] {
            assert_eq!(Header::try_from(header.code()), Ok(header));
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(
            Header::try_from(0x04),
            Err(DecodeError::UnknownHeader { code: 0x04 })
        );
        let err = Header::try_from(0xff).unwrap_err();
        assert_eq!(err.to_string(), "unknown header code: 0xff");
    }

    #[test]
    fn serializes_as_label() {
        let value = serde_json::to_value(Header::ButtonHold).expect("header json");
        assert_eq!(value, "BUTTON_HOLD");
    }
}
