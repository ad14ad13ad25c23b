//! Store error types.

use thiserror::Error;

/// Errors that can occur when using a store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the backing store.
    #[error("Failed to open store: {0}")]
    OpenError(String),

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Failed to perform a storage operation.
    #[error("Store operation failed: {0}")]
    IoError(#[from] std::io::Error),
}
