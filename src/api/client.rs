//! HTTP client for the OMDb endpoints
//!
//! Wraps the two OMDb lookups (title search and id lookup) using
//! [`reqwest`]. Payload parsing is kept in free functions so it can be
//! tested without a server.

use async_trait::async_trait;
use serde::Deserialize;

use super::error::FetchError;
use super::{ApiConfig, MovieApi};
use crate::models::{DetailRecord, SearchResult};

/// HTTP client for OMDb
pub struct OmdbClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl OmdbClient {
    /// Create a new client with its own connection pool
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    #[must_use]
    pub const fn with_client(client: reqwest::Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    /// Issue `GET <endpoint>?apikey=<key>&<param>=<value>` and return the body
    async fn get(&self, param: &str, value: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[("apikey", self.config.api_key.as_str()), (param, value)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), param, "OMDb request failed");
            return Err(FetchError::Transport {
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl MovieApi for OmdbClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, FetchError> {
        tracing::debug!(query, "Searching OMDb");
        let body = self.get("s", query).await?;
        parse_search_payload(&body)
    }

    async fn details(&self, id: &str) -> Result<DetailRecord, FetchError> {
        tracing::debug!(id, "Fetching OMDb record");
        let body = self.get("i", id).await?;
        parse_detail_payload(&body)
    }
}

/// Status flags OMDb puts in every body
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "Response")]
    response: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

impl Envelope {
    fn check(self) -> Result<(), FetchError> {
        if self.response.as_deref() == Some("False") {
            tracing::debug!(upstream = ?self.error, "OMDb reported no match");
            return Err(FetchError::NotFound {
                message: self.error,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct SearchPayload {
    #[serde(rename = "Search", default)]
    search: Vec<SearchResult>,
}

/// Parse a search body into its result list
///
/// # Errors
///
/// `NotFound` if the body carries `Response: "False"`, `Decode` if the body
/// is not valid JSON of the expected shape.
pub fn parse_search_payload(body: &[u8]) -> Result<Vec<SearchResult>, FetchError> {
    serde_json::from_slice::<Envelope>(body)?.check()?;
    Ok(serde_json::from_slice::<SearchPayload>(body)?.search)
}

/// Parse an id-lookup body into a detail record
///
/// # Errors
///
/// Same as [`parse_search_payload`].
pub fn parse_detail_payload(body: &[u8]) -> Result<DetailRecord, FetchError> {
    serde_json::from_slice::<Envelope>(body)?.check()?;
    Ok(serde_json::from_slice(body)?)
}
