//! Detail controller: fetch-by-identifier plus rating actions

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use super::title::TitleScope;
use crate::api::MovieApi;
use crate::fetch::{RequestSlot, Update};
use crate::models::{DetailRecord, RatedEntry};
use crate::store::{RatedStore, StoreError};

/// Highest rating a user can give
pub const MAX_RATING: u8 = 10;

/// What the detail view asks of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailSignal {
    /// Clear the selected identifier
    Close,
}

/// Reasons a rating could not be committed
#[derive(Debug, Error)]
pub enum RateError {
    #[error("No movie is loaded")]
    NoRecord,

    #[error("Rating must be between 1 and 10, got {0}")]
    OutOfRange(u8),

    #[error("Already rated {0}")]
    AlreadyRated(String),

    #[error("Could not save rating: {0}")]
    Store(#[from] StoreError),
}

/// Presented state of the detail view
///
/// `record` and `error` are never both populated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailState {
    pub record: Option<DetailRecord>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Loads the record for the selected identifier
///
/// No debounce: a selection is already a discrete action. Selecting a new
/// identifier supersedes the request for the previous one.
pub struct DetailController<A: MovieApi + ?Sized + 'static> {
    api: Arc<A>,
    selected: Option<String>,
    state: DetailState,
    user_rating: u8,
    rating_changes: u32,
    title: TitleScope,
    requests: RequestSlot<DetailRecord>,
}

impl<A: MovieApi + ?Sized + 'static> DetailController<A> {
    #[must_use]
    pub fn new(api: Arc<A>, title: TitleScope) -> Self {
        Self {
            api,
            selected: None,
            state: DetailState::default(),
            user_rating: 0,
            rating_changes: 0,
            title,
            requests: RequestSlot::new(),
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub const fn state(&self) -> &DetailState {
        &self.state
    }

    #[must_use]
    pub const fn record(&self) -> Option<&DetailRecord> {
        self.state.record.as_ref()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    /// Rating currently picked but not yet committed (0 = none)
    #[must_use]
    pub const fn user_rating(&self) -> u8 {
        self.user_rating
    }

    /// How many times the rating was changed for the current record
    #[must_use]
    pub const fn rating_changes(&self) -> u32 {
        self.rating_changes
    }

    /// Switch to another identifier, or close with `None`
    ///
    /// Selecting the identifier that is already selected does nothing.
    /// Must be called from within a tokio runtime.
    pub fn select(&mut self, id: Option<String>) {
        if self.selected == id {
            return;
        }

        self.requests.cancel();
        self.title.release();
        self.state = DetailState::default();
        self.user_rating = 0;
        self.rating_changes = 0;
        self.selected = id;

        let Some(id) = self.selected.clone() else {
            tracing::debug!("Detail view closed");
            return;
        };

        tracing::debug!(%id, "Loading movie details");
        self.state.is_loading = true;
        let api = Arc::clone(&self.api);
        self.requests
            .issue(Duration::ZERO, async move { api.details(&id).await });
    }

    fn apply(&mut self, update: Update<DetailRecord>) {
        match update {
            Update::Started => {
                self.state.is_loading = true;
                self.state.error = None;
            }
            Update::Finished(Ok(record)) => {
                self.title.acquire(&record.title);
                self.state.record = Some(record);
                self.state.error = None;
                self.state.is_loading = false;
            }
            Update::Finished(Err(e)) => {
                if e.is_not_found() {
                    tracing::debug!(id = ?self.selected, "Movie not found");
                } else {
                    tracing::warn!(id = ?self.selected, error = ?e, "Detail request failed");
                }
                self.state.record = None;
                self.state.error = Some(e.to_string());
                self.state.is_loading = false;
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
    pub async fn next_update(&mut self) {
        let update = self.requests.next().await;
        self.apply(update);
    }

    /// Pick a rating for the current record
    ///
    /// Every non-zero pick counts as a change, including picking the same
    /// value again.
    pub fn set_user_rating(&mut self, rating: u8) {
        if rating == 0 {
            return;
        }
        self.user_rating = rating.min(MAX_RATING);
        self.rating_changes += 1;
    }

    /// Store the current record with `rating` and ask to close the view
    ///
    /// # Errors
    ///
    /// Refuses when nothing is loaded, the rating is outside 1..=10, or the
    /// title is already in the store. Store write failures propagate.
    pub fn commit_rating(
        &mut self,
        store: &mut RatedStore,
        rating: u8,
    ) -> Result<DetailSignal, RateError> {
        let record = self.state.record.as_ref().ok_or(RateError::NoRecord)?;
        if !(1..=MAX_RATING).contains(&rating) {
            return Err(RateError::OutOfRange(rating));
        }
        if store.contains(&record.id) {
            return Err(RateError::AlreadyRated(record.id.clone()));
        }

        let entry = RatedEntry::from_record(record, rating, Some(self.rating_changes));
        store.add(entry)?;
        Ok(self.request_close())
    }

    /// Ask the session to clear the selection
    #[must_use]
    pub const fn request_close(&self) -> DetailSignal {
        DetailSignal::Close
    }
}

impl<A: MovieApi + ?Sized + 'static> Drop for DetailController<A> {
    fn drop(&mut self) {
        self.requests.cancel();
        self.title.release();
    }
}
