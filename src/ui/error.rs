//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal could not be set up, drawn or read
    #[error("Terminal error: {0}")]
    IoError(#[from] std::io::Error),

    /// The terminal closed its input stream
    #[error("Terminal input stream ended")]
    InputClosed,
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
