use std::ops::Range;

use super::error::DecodeError;
use super::format::PayloadFormat;
use super::layout;

/// Safe, range-based access to a hex payload.
///
/// Ranges are in hex characters. Digits are accepted in either case.
pub struct HexReader<'a> {
    format: PayloadFormat,
    data: &'a str,
}

impl<'a> HexReader<'a> {
    pub fn new(format: PayloadFormat, data: &'a str) -> Self {
        Self { format, data }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), DecodeError> {
        if self.data.len() < needed {
            return Err(DecodeError::InvalidLength {
                format: self.format,
                needed,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    /// Returns the slice only if it exists and holds nothing but hex digits.
    pub fn read_slice(
        &self,
        field: &'static str,
        range: Range<usize>,
    ) -> Result<&'a str, DecodeError> {
        match self.data.get(range.clone()) {
            Some(slice) if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_hexdigit()) => {
                Ok(slice)
            }
            slice => Err(DecodeError::MalformedHex {
                field,
                range,
                slice: slice.unwrap_or_default().to_string(),
            }),
        }
    }

    pub fn read_u8(&self, field: &'static str, range: Range<usize>) -> Result<u8, DecodeError> {
        let digits = self.read_slice(field, range.clone())?;
        u8::from_str_radix(digits, 16).map_err(|_| DecodeError::MalformedHex {
            field,
            range,
            slice: digits.to_string(),
        })
    }

    /// Big-endian unsigned read of a one- or two-byte field.
    pub fn read_u16_be(
        &self,
        field: &'static str,
        range: Range<usize>,
    ) -> Result<u16, DecodeError> {
        let digits = self.read_slice(field, range.clone())?;
        u16::from_str_radix(digits, 16).map_err(|_| DecodeError::MalformedHex {
            field,
            range,
            slice: digits.to_string(),
        })
    }

    /// True when every character in `range` is the sentinel digit.
    pub fn is_sentinel(&self, range: Range<usize>) -> bool {
        self.data
            .get(range)
            .filter(|slice| !slice.is_empty())
            .is_some_and(|slice| {
                slice
                    .bytes()
                    .all(|b| b.eq_ignore_ascii_case(&layout::SENTINEL_DIGIT))
            })
    }
}
