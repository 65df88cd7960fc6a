//! Error types for the store layer.

use backoffice_types::EntityId;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport-level HTTP failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned status {code}")]
    Status { code: u16 },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Record not found.
    #[error("record not found: {0}")]
    NotFound(EntityId),

    /// The patch was not a JSON object.
    #[error("invalid patch: {0}")]
    InvalidPatch(String),

    /// Injected failure (in-memory store, tests only).
    #[error("injected failure for {0}")]
    Injected(EntityId),
}
