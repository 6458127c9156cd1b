use std::ops::Range;

use thiserror::Error;

use super::format::PayloadFormat;

/// Errors returned by payload decoding.
///
/// No partial record is produced when any of these is returned.
///
/// # Examples
/// ```
/// use soildec_core::{DecodeError, PayloadFormat, decode};
///
/// let err = decode(PayloadFormat::Legacy, "0120").unwrap_err();
/// assert!(matches!(err, DecodeError::InvalidLength { needed: 12, actual: 4, .. }));
/// assert!(err.to_string().contains("min 12 characters expected"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error(
        "invalid payload length for {format} format: min {needed} characters expected, got {actual}"
    )]
    InvalidLength {
        format: PayloadFormat,
        needed: usize,
        actual: usize,
    },
    #[error("unknown header code: 0x{code:02x}")]
    UnknownHeader { code: u8 },
    #[error("malformed hex in {field} at {}..{}: {slice:?}", .range.start, .range.end)]
    MalformedHex {
        field: &'static str,
        range: Range<usize>,
        slice: String,
    },
}
