//! Fetch error types
//!
//! Two user-visible failures are kept apart: a transport failure (bad
//! status, network trouble, unreadable body) and an upstream "not found"
//! answer carried in an otherwise successful response. Cancelled requests
//! never produce a `FetchError`; the controllers drop them before they get
//! this far.

use thiserror::Error;

/// Message shown for any transport-level failure
pub const TRANSPORT_MESSAGE: &str = "Something went wrong with the request";

/// Message shown when the upstream reports no match
pub const NOT_FOUND_MESSAGE: &str = "Movie not found";

/// Errors from the OMDb client layer
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success status code
    #[error("Something went wrong with the request")]
    Transport {
        /// HTTP status code
        status: u16,
    },

    /// The HTTP request itself failed (network, DNS, TLS, etc.)
    #[error("Something went wrong with the request")]
    Request(#[from] reqwest::Error),

    /// The response body was not the JSON we expected
    #[error("Something went wrong with the request")]
    Decode(#[from] serde_json::Error),

    /// The payload carried `Response: "False"`
    #[error("Movie not found")]
    NotFound {
        /// Upstream `Error` text, kept for logging
        message: Option<String>,
    },
}

impl FetchError {
    /// Whether this is the logical not-found case rather than a transport failure
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_message() {
        let error = FetchError::Transport { status: 503 };
        assert_eq!(error.to_string(), "Something went wrong with the request");
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_not_found_message_hides_upstream_text() {
        let error = FetchError::NotFound {
            message: Some("Incorrect IMDb ID.".to_string()),
        };
        assert_eq!(error.to_string(), "Movie not found");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_decode_error_reads_as_transport() {
        let error = FetchError::from(serde_json::from_str::<u8>("{").unwrap_err());
        assert_eq!(error.to_string(), TRANSPORT_MESSAGE);
    }
}
