//! Error types for proxylist

use deck_core::CoreError;
use thiserror::Error;

/// Unified error type for loading, saving and rendering decklists
#[derive(Debug, Error)]
pub enum ProxyError {
    /// A record in a decklist could not be parsed
    #[error("Malformed source at line {line}: {reason}")]
    MalformedSource { line: usize, reason: String },
    /// File I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// CSV reader failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// JSON (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A parsed record was rejected by the card model
    #[error(transparent)]
    Core(#[from] CoreError),
    /// A required input was not given
    #[error("Missing argument: {0}")]
    MissingArgument(String),
    /// Output format cannot be produced
    #[error("Unsupported format: {0}")]
    Unsupported(String),
}

impl ProxyError {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        ProxyError::MalformedSource {
            line,
            reason: reason.into(),
        }
    }
}

/// Result alias for proxylist operations
pub type Result<T> = std::result::Result<T, ProxyError>;
