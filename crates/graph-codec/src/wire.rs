//! JSON transport for record sequences and snapshots.
//!
//! The codec itself works on [`Record`] values; these helpers only turn them
//! into bytes and back. Anything that fails to parse is malformed input.

use crate::error::{CodecError, MalformedInput};
use crate::record::{Record, Snapshot};

/// Serialize a record sequence to JSON bytes.
pub fn to_bytes(records: &[Record], pretty: bool) -> Result<Vec<u8>, CodecError> {
    write_json(records, pretty)
}

/// Parse a record sequence from JSON bytes.
pub fn from_bytes(bytes: &[u8]) -> Result<Vec<Record>, MalformedInput> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Serialize a snapshot document to JSON bytes.
pub fn snapshot_to_bytes(snapshot: &Snapshot, pretty: bool) -> Result<Vec<u8>, CodecError> {
    write_json(snapshot, pretty)
}

/// Parse a snapshot document from JSON bytes.
pub fn snapshot_from_bytes(bytes: &[u8]) -> Result<Snapshot, MalformedInput> {
    Ok(serde_json::from_slice(bytes)?)
}

fn write_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> Result<Vec<u8>, CodecError> {
    let out = if pretty {
        serde_json::to_vec_pretty(value)
    } else {
        serde_json::to_vec(value)
    };
    out.map_err(|e| CodecError::Serialization(e.to_string()))
}
