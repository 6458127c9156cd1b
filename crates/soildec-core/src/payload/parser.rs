use tracing::{debug, trace};

use super::error::DecodeError;
use super::format::PayloadFormat;
use super::header::Header;
use super::layout::{self, FieldSpec, SentinelMode};
use super::reader::HexReader;
use crate::{DecodedRecord, FieldReading, Reading};

/// Decode a hex payload with the default (faithful) sentinel wiring.
pub fn decode(format: PayloadFormat, data: &str) -> Result<DecodedRecord, DecodeError> {
    decode_with_mode(format, data, SentinelMode::default())
}

pub fn decode_with_mode(
    format: PayloadFormat,
    data: &str,
    mode: SentinelMode,
) -> Result<DecodedRecord, DecodeError> {
    let table = format.layout();
    let reader = HexReader::new(format, data);
    reader.require_len(table.min_len)?;

    let code = reader.read_u8("header", layout::HEADER_RANGE)?;
    let header = Header::try_from(code)?;

    let fields = table
        .fields
        .iter()
        .map(|spec| decode_field(&reader, spec, mode))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(%format, ?mode, %header, "decoded payload");
    Ok(DecodedRecord::new(format, header, fields))
}

/// Decode an uplink delivered as raw bytes rather than hex text.
pub fn decode_bytes(format: PayloadFormat, bytes: &[u8]) -> Result<DecodedRecord, DecodeError> {
    let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    decode(format, &hex)
}

fn decode_field(
    reader: &HexReader<'_>,
    spec: &FieldSpec,
    mode: SentinelMode,
) -> Result<FieldReading, DecodeError> {
    let reading = if reader.is_sentinel(spec.presence_range(mode)) {
        None
    } else {
        let raw = reader.read_u16_be(spec.name, spec.range.clone())?;
        Some(Reading::new(raw, spec.scale))
    };
    trace!(field = spec.name, ?reading, "decoded field");

    Ok(FieldReading {
        name: spec.name,
        label: spec.label,
        reading,
    })
}
