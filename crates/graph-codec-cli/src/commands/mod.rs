//! CLI command implementations

pub mod demo;
pub mod inspect;
pub mod reencode;
pub mod validate;

use std::io::Read;
use std::path::Path;

use graph_codec::{Codec, Decoded};

use crate::error::CliResult;

/// Read a record file (or stdin for `-`) and decode it.
pub fn load(path: &Path, snapshot: bool, codec: &Codec) -> CliResult<Decoded> {
    let bytes = if path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        std::fs::read(path)?
    };

    let decoded = if snapshot {
        codec.snapshot_from_bytes(&bytes)?
    } else {
        codec.decode_from_bytes(&bytes)?
    };
    tracing::debug!(path = %path.display(), persons = decoded.graph.len(), "Loaded graph");
    Ok(decoded)
}
