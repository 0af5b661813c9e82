//! OMDb API access
//!
//! [`MovieApi`] is the fetch primitive the controllers depend on.
//! [`OmdbClient`] implements it over HTTP; tests substitute a scripted
//! implementation.

mod client;
mod error;

pub use client::{OmdbClient, parse_detail_payload, parse_search_payload};
pub use error::{FetchError, NOT_FOUND_MESSAGE, TRANSPORT_MESSAGE};

use async_trait::async_trait;

use crate::models::{DetailRecord, SearchResult};

/// Default OMDb endpoint
pub const DEFAULT_ENDPOINT: &str = "https://www.omdbapi.com/";

/// Connection settings injected into the client at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the search endpoint
    pub endpoint: String,
    /// OMDb API key, sent as `apikey`
    pub api_key: String,
}

impl ApiConfig {
    /// Create a config for the default endpoint
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Point the client at a different endpoint
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

/// Source of search results and detail records
///
/// Implementations must be cancel-safe: the controllers drop the returned
/// future when a request is superseded.
#[async_trait]
pub trait MovieApi: Send + Sync {
    /// Search titles matching a free-text query (`s=<query>`)
    ///
    /// # Errors
    ///
    /// Returns `FetchError::NotFound` when upstream reports no match, or a
    /// transport variant when the request fails.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, FetchError>;

    /// Fetch the full record for one identifier (`i=<id>`)
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`MovieApi::search`].
    async fn details(&self, id: &str) -> Result<DetailRecord, FetchError>;
}
