//! CLI error types

use graph_codec::{CodecError, GraphError};
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Encode/decode failure
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// Graph construction failure
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    /// Graph failed the symmetry check
    #[error("Validation failed: {0} relation(s) without a reverse edge")]
    ValidationFailed(usize),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
