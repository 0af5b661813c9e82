//! Debounced, cancellable search controller

use std::sync::Arc;
use std::time::Duration;

use super::state::{SearchPhase, SearchState};
use crate::api::MovieApi;
use crate::fetch::{RequestSlot, Update};
use crate::models::SearchResult;

/// Delay between the last keystroke and the request
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Shortest trimmed query that triggers a request
pub const MIN_QUERY_LEN: usize = 3;

/// Tuning for [`SearchController`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub debounce: Duration,
    pub min_query_len: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            min_query_len: MIN_QUERY_LEN,
        }
    }
}

/// Owns the query and keeps the result state consistent with the latest request
///
/// Updates are pulled in by the owner, either with [`poll`](Self::poll) from
/// an event loop tick or by awaiting [`next_update`](Self::next_update).
pub struct SearchController<A: MovieApi + ?Sized + 'static> {
    api: Arc<A>,
    options: SearchOptions,
    query: String,
    state: SearchState,
    phase: SearchPhase,
    requests: RequestSlot<Vec<SearchResult>>,
}

impl<A: MovieApi + ?Sized + 'static> SearchController<A> {
    #[must_use]
    pub fn new(api: Arc<A>, options: SearchOptions) -> Self {
        Self {
            api,
            options,
            query: String::new(),
            state: SearchState::default(),
            phase: SearchPhase::Idle,
            requests: RequestSlot::new(),
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn state(&self) -> &SearchState {
        &self.state
    }

    #[must_use]
    pub fn results(&self) -> &[SearchResult] {
        &self.state.results
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    #[must_use]
    pub const fn phase(&self) -> SearchPhase {
        self.phase
    }

    #[must_use]
    pub const fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Replace the query and schedule a search for it
    ///
    /// `reset_selection` runs first on every change; a new search closes any
    /// open detail view. Queries shorter than the minimum clear the state
    /// synchronously and issue nothing. Otherwise the request fires once the
    /// debounce delay passes without another change.
    ///
    /// Must be called from within a tokio runtime.
    pub fn set_query(&mut self, query: impl Into<String>, reset_selection: impl FnOnce()) {
        reset_selection();

        self.query = query.into();
        if self.requests.cancel() {
            tracing::debug!("Superseded pending search");
        }
        self.state.is_loading = false;

        let settled = self.query.trim();
        if settled.chars().count() < self.options.min_query_len {
            self.state.clear();
            self.phase = SearchPhase::Idle;
            return;
        }

        let api = Arc::clone(&self.api);
        let settled = settled.to_string();
        self.requests.issue(self.options.debounce, async move {
            api.search(&settled).await
        });
        self.phase = SearchPhase::Debouncing;
    }

    /// Abort the pending timer and any in-flight request
    ///
    /// Nothing from the aborted request will be applied.
    pub fn cancel(&mut self) {
        if self.requests.cancel() {
            self.phase = SearchPhase::Aborted;
        }
        self.state.is_loading = false;
    }

    fn apply(&mut self, update: Update<Vec<SearchResult>>) {
        match update {
            Update::Started => {
                self.state.is_loading = true;
                self.state.error = None;
                self.phase = SearchPhase::Fetching;
            }
            Update::Finished(Ok(results)) => {
                tracing::debug!(query = %self.query, count = results.len(), "Search completed");
                self.state.results = results;
                self.state.error = None;
                self.state.is_loading = false;
                self.phase = SearchPhase::Success;
            }
            Update::Finished(Err(e)) => {
                if e.is_not_found() {
                    tracing::debug!(query = %self.query, "Search found nothing");
                } else {
                    tracing::warn!(query = %self.query, error = ?e, "Search failed");
                }
                self.state.results.clear();
                self.state.error = Some(e.to_string());
                self.state.is_loading = false;
                self.phase = SearchPhase::Error;
            }
        }
    }

    /// Apply every update that has already arrived
    ///
    /// Returns `true` if the state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Some(update) = self.requests.try_next() {
            self.apply(update);
            changed = true;
        }
        changed
    }

    /// Wait for the next update of the current request and apply it
    ///
    /// Cancel-safe, so it can sit in a `tokio::select!` next to input events.
    pub async fn next_update(&mut self) {
        let update = self.requests.next().await;
        self.apply(update);
    }
}

impl<A: MovieApi + ?Sized + 'static> Drop for SearchController<A> {
    fn drop(&mut self) {
        self.cancel();
    }
}
