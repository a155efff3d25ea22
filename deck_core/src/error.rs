//! Error types for deck_core

use thiserror::Error;

/// Errors raised while building card identities or mutating multisets.
///
/// The reconciliation algorithms themselves never fail; these only surface
/// when a caller hands the core values it cannot represent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Card name was empty or whitespace-only
    #[error("Invalid card identity: {0}")]
    InvalidIdentity(String),
    /// Negative count or zero collector number
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for deck_core operations
pub type Result<T> = std::result::Result<T, CoreError>;
