//! Soil sensor payload decoding.
//!
//! Each payload format follows the same layered structure:
//! - `layout`: hex-character ranges and field tables (source of truth)
//! - `reader`: safe slicing and hex/sentinel conventions
//! - `parser`: table-driven decoding (no direct string indexing)
//! - `error`: explicit, actionable errors
//!
//! Two formats share one parser. The legacy table keys the presence of
//! `temperature` and `soil` to the voltage bytes; this wiring is reproduced
//! by default (`SentinelMode::Faithful`) and can be switched to per-field
//! sentinels with `SentinelMode::Corrected`.
//!
//! Parsers are pure and contain no I/O.

pub mod error;
pub mod format;
pub mod header;
pub mod layout;
pub mod parser;
pub mod reader;

pub use error::DecodeError;
pub use format::PayloadFormat;
pub use header::Header;
pub use layout::{Scale, SentinelMode};
pub use parser::{decode, decode_bytes, decode_with_mode};
