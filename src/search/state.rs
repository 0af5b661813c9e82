//! Presented state of the search controller

use crate::models::SearchResult;

/// Lifecycle of the current search request
///
/// `Idle → Debouncing → Fetching → {Success | Error | Aborted}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// No active search (query too short, or nothing typed yet)
    #[default]
    Idle,
    /// Waiting for the query to settle
    Debouncing,
    /// Network call in flight
    Fetching,
    /// Results applied
    Success,
    /// Error applied
    Error,
    /// Torn down before completing; nothing was applied
    Aborted,
}

/// What the view layer renders for the result list
///
/// `results` and `error` are never both populated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub results: Vec<SearchResult>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl SearchState {
    /// Drop results and error, keeping the loading flag
    pub fn clear(&mut self) {
        self.results.clear();
        self.error = None;
    }
}
