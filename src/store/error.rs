//! Store-specific error types
//!
//! Only writes can fail from the caller's point of view. A missing or
//! corrupt collection on open is recovered locally and never becomes a
//! `StoreError`.

use thiserror::Error;

/// Rating store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Represents a sled database error
    #[error("Database error: {0}")]
    SledError(#[from] sled::Error),

    /// The collection could not be encoded as JSON
    #[error("Error while encoding ratings: {0}")]
    EncodeError(#[from] serde_json::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
