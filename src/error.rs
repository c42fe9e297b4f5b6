//! Error types for the combo input.

use thiserror::Error;

/// Result type alias using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing the backing store failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored recent entries could not be encoded or decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A storage key that cannot be mapped onto the store
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}
