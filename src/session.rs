//! Application session
//!
//! Composes the search controller, the detail controller and the rating
//! store, and translates user-facing events into calls on them. Both the
//! TUI and the tests drive the application through this type.

use std::sync::Arc;

use crate::api::MovieApi;
use crate::detail::{DetailController, DetailSignal, RateError, TitleScope};
use crate::search::{SearchController, SearchOptions};
use crate::store::{RatedStore, StoreError, WatchedSummary};

/// One interactive session over a rating store
pub struct Session<A: MovieApi + ?Sized + 'static> {
    search: SearchController<A>,
    detail: DetailController<A>,
    store: RatedStore,
}

impl<A: MovieApi + ?Sized + 'static> Session<A> {
    #[must_use]
    pub fn new(api: Arc<A>, options: SearchOptions, store: RatedStore, title: TitleScope) -> Self {
        Self {
            search: SearchController::new(Arc::clone(&api), options),
            detail: DetailController::new(api, title),
            store,
        }
    }

    #[must_use]
    pub const fn search(&self) -> &SearchController<A> {
        &self.search
    }

    #[must_use]
    pub const fn detail(&self) -> &DetailController<A> {
        &self.detail
    }

    #[must_use]
    pub const fn store(&self) -> &RatedStore {
        &self.store
    }

    #[must_use]
    pub fn query(&self) -> &str {
        self.search.query()
    }

    /// Currently selected identifier
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.detail.selected()
    }

    /// Replace the query; closes the detail view as a side effect
    pub fn set_query(&mut self, query: impl Into<String>) {
        let detail = &mut self.detail;
        self.search.set_query(query, || detail.select(None));
    }

    /// Select a result, or deselect it if it is already selected
    pub fn toggle_selection(&mut self, id: &str) {
        if self.detail.selected() == Some(id) {
            self.close_detail();
        } else {
            self.detail.select(Some(id.to_string()));
        }
    }

    /// Clear the selected identifier
    pub fn close_detail(&mut self) {
        self.detail.select(None);
    }

    fn handle_signal(&mut self, signal: DetailSignal) {
        match signal {
            DetailSignal::Close => self.close_detail(),
        }
    }

    /// Pick a rating for the open record
    pub fn rate(&mut self, rating: u8) {
        self.detail.set_user_rating(rating);
    }

    /// Commit the picked rating for the open record
    ///
    /// # Errors
    ///
    /// See [`DetailController::commit_rating`].
    pub fn commit_rating(&mut self) -> Result<(), RateError> {
        let rating = self.detail.user_rating();
        let signal = self.detail.commit_rating(&mut self.store, rating)?;
        self.handle_signal(signal);
        Ok(())
    }

    /// The detail view's close action
    pub fn request_close(&mut self) {
        let signal = self.detail.request_close();
        self.handle_signal(signal);
    }

    /// Remove a rated title
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be written.
    pub fn remove_rating(&mut self, id: &str) -> Result<bool, StoreError> {
        Ok(self.store.remove(id)? > 0)
    }

    /// Whether the open record is already in the store
    #[must_use]
    pub fn is_selected_rated(&self) -> bool {
        self.selected().is_some_and(|id| self.store.contains(id))
    }

    /// Stored rating of the open record, if any
    #[must_use]
    pub fn selected_rating(&self) -> Option<u8> {
        self.selected().and_then(|id| self.store.user_rating(id))
    }

    #[must_use]
    pub fn summary(&self) -> WatchedSummary {
        self.store.summary()
    }

    /// Apply every pending controller update; `true` if anything changed
    pub fn poll(&mut self) -> bool {
        let search = self.search.poll();
        let detail = self.detail.poll();
        search || detail
    }

    /// Wait until either controller applies an update
    ///
    /// Cancel-safe.
    pub async fn next_update(&mut self) {
        tokio::select! {
            () = self.search.next_update() => {}
            () = self.detail.next_update() => {}
        }
    }

    /// Abort outstanding requests before the session goes away
    pub fn shutdown(&mut self) {
        self.search.cancel();
        self.close_detail();
    }
}
