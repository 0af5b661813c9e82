//! Testing utilities for cinemate
//!
//! This module provides helper types and functions for writing tests:
//! a `TestStore` wrapper around a temporary rating store, a scripted
//! `MockApi` standing in for OMDb, and a `RecordingTitle` sink.
//!
//! Only available when compiled with `cfg(test)`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;
use tokio::sync::oneshot;

use crate::api::{FetchError, MovieApi};
use crate::detail::TitleSink;
use crate::models::{DetailRecord, RatedEntry, SearchResult};
use crate::store::RatedStore;

/// Wrapper for a temporary rating store that cleans up on drop
///
/// The store lives in its own temporary directory, which is removed when
/// the wrapper goes out of scope.
pub struct TestStore {
    _dir: TempDir,
    path: PathBuf,
    store: Option<RatedStore>,
}

impl TestStore {
    /// Create a fresh, empty store
    ///
    /// # Panics
    /// Panics if the temporary directory or the store cannot be created.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("store");
        let store = RatedStore::open(&path).expect("Failed to open test store");
        Self {
            _dir: dir,
            path,
            store: Some(store),
        }
    }

    /// Get a reference to the underlying store
    ///
    /// # Panics
    /// Panics if the store has been closed.
    #[must_use]
    pub fn store(&self) -> &RatedStore {
        self.store.as_ref().expect("Test store is closed")
    }

    /// Get a mutable reference to the underlying store
    ///
    /// # Panics
    /// Panics if the store has been closed.
    pub fn store_mut(&mut self) -> &mut RatedStore {
        self.store.as_mut().expect("Test store is closed")
    }

    /// Take ownership of the open store, leaving the wrapper closed
    ///
    /// # Panics
    /// Panics if the store has been closed.
    pub fn take(&mut self) -> RatedStore {
        self.store.take().expect("Test store is closed")
    }

    /// Path of the sled directory
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drop the open handle so the directory can be opened elsewhere
    pub fn close(&mut self) {
        self.store = None;
    }

    /// Close and open the store again from disk
    ///
    /// # Panics
    /// Panics if the store cannot be reopened.
    pub fn reopen(&mut self) -> &mut RatedStore {
        self.close();
        self.store = Some(RatedStore::open(&self.path).expect("Failed to reopen test store"));
        self.store_mut()
    }
}

/// Build a rated entry with the given identifier and user rating
#[must_use]
pub fn rated(id: &str, user_rating: u8) -> RatedEntry {
    RatedEntry {
        id: id.to_string(),
        title: format!("Title {id}"),
        year: "2010".to_string(),
        poster: "N/A".to_string(),
        runtime: 120,
        imdb_rating: 8.0,
        user_rating,
        count_rating_decisions: Some(1),
    }
}

/// Build a search hit
#[must_use]
pub fn hit(id: &str, title: &str) -> SearchResult {
    SearchResult {
        id: id.to_string(),
        title: title.to_string(),
        year: "2010".to_string(),
        poster: "N/A".to_string(),
    }
}

/// Build a detail record
#[must_use]
pub fn record(id: &str, title: &str) -> DetailRecord {
    DetailRecord {
        id: id.to_string(),
        title: title.to_string(),
        year: "2010".to_string(),
        poster: "N/A".to_string(),
        runtime: "148 min".to_string(),
        imdb_rating: "8.8".to_string(),
        ..DetailRecord::default()
    }
}

/// A call observed by [`MockApi`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    Search(String),
    Details(String),
}

type Reply<T> = Result<T, FetchError>;

enum Scripted<T> {
    Ready(Reply<T>),
    Gated(oneshot::Receiver<Reply<T>>),
}

impl<T> Scripted<T> {
    async fn resolve(self) -> Reply<T> {
        match self {
            Self::Ready(reply) => reply,
            // Dropping the sender reads as an upstream miss.
            Self::Gated(rx) => rx.await.unwrap_or(Err(FetchError::NotFound { message: None })),
        }
    }
}

/// Scripted stand-in for the OMDb client
///
/// Replies are consumed in call order per query/identifier. Unscripted calls
/// answer with `NotFound`. Gated replies stay pending until the test sends
/// through the returned channel, which lets tests resolve requests out of
/// order.
#[derive(Default)]
pub struct MockApi {
    calls: Mutex<Vec<MockCall>>,
    searches: Mutex<HashMap<String, Vec<Scripted<Vec<SearchResult>>>>>,
    details: Mutex<HashMap<String, Vec<Scripted<DetailRecord>>>>,
}

impl MockApi {
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply_search(&self, query: &str, reply: Reply<Vec<SearchResult>>) {
        push(&self.searches, query, Scripted::Ready(reply));
    }

    pub fn gate_search(&self, query: &str) -> oneshot::Sender<Reply<Vec<SearchResult>>> {
        let (tx, rx) = oneshot::channel();
        push(&self.searches, query, Scripted::Gated(rx));
        tx
    }

    pub fn reply_details(&self, id: &str, reply: Reply<DetailRecord>) {
        push(&self.details, id, Scripted::Ready(reply));
    }

    pub fn gate_details(&self, id: &str) -> oneshot::Sender<Reply<DetailRecord>> {
        let (tx, rx) = oneshot::channel();
        push(&self.details, id, Scripted::Gated(rx));
        tx
    }

    /// Every call made so far, in order
    #[must_use]
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn take<T>(
        &self,
        scripts: &Mutex<HashMap<String, Vec<Scripted<T>>>>,
        key: &str,
        call: MockCall,
    ) -> Option<Scripted<T>> {
        self.calls.lock().expect("calls lock").push(call);
        let mut scripts = scripts.lock().expect("script lock");
        let queue = scripts.get_mut(key)?;
        (!queue.is_empty()).then(|| queue.remove(0))
    }
}

fn push<T>(scripts: &Mutex<HashMap<String, Vec<Scripted<T>>>>, key: &str, script: Scripted<T>) {
    scripts
        .lock()
        .expect("script lock")
        .entry(key.to_string())
        .or_default()
        .push(script);
}

#[async_trait]
impl MovieApi for MockApi {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, FetchError> {
        match self.take(&self.searches, query, MockCall::Search(query.to_string())) {
            Some(script) => script.resolve().await,
            None => Err(FetchError::NotFound { message: None }),
        }
    }

    async fn details(&self, id: &str) -> Result<DetailRecord, FetchError> {
        match self.take(&self.details, id, MockCall::Details(id.to_string())) {
            Some(script) => script.resolve().await,
            None => Err(FetchError::NotFound { message: None }),
        }
    }
}

/// Title sink that records every title it is given
#[derive(Clone, Default)]
pub struct RecordingTitle {
    titles: Arc<Mutex<Vec<String>>>,
}

impl RecordingTitle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every title set so far, in order
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.titles.lock().expect("title lock").clone()
    }

    /// The most recent title, if any
    #[must_use]
    pub fn current(&self) -> Option<String> {
        self.titles.lock().expect("title lock").last().cloned()
    }
}

impl TitleSink for RecordingTitle {
    fn set_title(&mut self, title: &str) {
        self.titles.lock().expect("title lock").push(title.to_string());
    }
}
