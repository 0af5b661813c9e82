//! Persistent store for rated titles
//!
//! Provides the watched-list collection backed by sled. The whole collection
//! lives under a single key as a JSON array and is rewritten after every
//! mutation, so the on-disk copy never lags the in-memory one.
//!
//! Layout:
//! - `ratings` tree, key `watched`: JSON-encoded `Vec<RatedEntry>`

use sled::{Db, Tree};
use std::path::Path;

use crate::models::RatedEntry;

pub mod error;
pub mod stats;

pub use error::StoreError;
pub use stats::{WatchedSummary, mean};

const RATINGS_TREE: &str = "ratings";
const WATCHED_KEY: &[u8] = b"watched";

/// Rated-title collection with write-through persistence
///
/// Entries keep insertion order. Identifiers are expected to be unique, but
/// that is gated by callers (see [`crate::detail::DetailController`]); `add`
/// itself accepts duplicates.
pub struct RatedStore {
    db: Db,
    ratings: Tree,
    entries: Vec<RatedEntry>,
}

impl RatedStore {
    /// Opens or creates a store at the specified path
    ///
    /// A missing or unreadable collection is replaced by an empty one; the
    /// recovered state is written back immediately.
    ///
    /// # Examples
    /// ```no_run
    /// use cinemate::store::RatedStore;
    /// let store = RatedStore::open("my_store").unwrap();
    /// println!("{} rated titles", store.len());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or the initial
    /// write-back fails.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = sled::open(path.as_ref())?;
        let ratings = db.open_tree(RATINGS_TREE)?;
        let entries = Self::load(&ratings);

        tracing::debug!(
            path = %path.as_ref().display(),
            count = entries.len(),
            "Opened rating store",
        );

        let store = Self {
            db,
            ratings,
            entries,
        };
        store.persist()?;
        Ok(store)
    }

    fn load(ratings: &Tree) -> Vec<RatedEntry> {
        match ratings.get(WATCHED_KEY) {
            Ok(Some(bytes)) => match serde_json::from_slice::<Option<Vec<RatedEntry>>>(&bytes) {
                Ok(entries) => entries.unwrap_or_default(),
                Err(e) => {
                    tracing::warn!(error = %e, "Stored ratings are malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read stored ratings, starting empty");
                Vec::new()
            }
        }
    }

    /// Serialize the full collection and flush it to disk
    fn persist(&self) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(&self.entries)?;
        self.ratings.insert(WATCHED_KEY, bytes)?;
        self.db.flush()?;
        Ok(())
    }

    /// Append a rated entry
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the collection cannot be written back.
    pub fn add(&mut self, entry: RatedEntry) -> Result<(), StoreError> {
        tracing::info!(id = %entry.id, rating = entry.user_rating, "Adding rated title");
        self.entries.push(entry);
        self.persist()
    }

    /// Remove every entry with the given identifier
    ///
    /// Returns the number of entries removed. Removing an unknown identifier
    /// is a no-op and does not touch the disk.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the collection cannot be written back.
    pub fn remove(&mut self, id: &str) -> Result<usize, StoreError> {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        let removed = before - self.entries.len();

        if removed > 0 {
            tracing::info!(id, removed, "Removed rated title");
            self.persist()?;
        }
        Ok(removed)
    }

    /// Check whether the identifier has been rated
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Get the first entry for an identifier
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RatedEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// The user's rating for an identifier, if rated
    #[must_use]
    pub fn user_rating(&self, id: &str) -> Option<u8> {
        self.get(id).map(|entry| entry.user_rating)
    }

    /// All entries in insertion order
    #[must_use]
    pub fn entries(&self) -> &[RatedEntry] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count and mean figures over the current collection
    #[must_use]
    pub fn summary(&self) -> WatchedSummary {
        WatchedSummary::from_entries(&self.entries)
    }

    /// Raw persisted bytes of the collection
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database read fails.
    pub fn persisted(&self) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.ratings.get(WATCHED_KEY)?.map(|bytes| bytes.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{TestStore, rated};

    fn write_raw(path: &Path, bytes: &[u8]) {
        let db = sled::open(path).unwrap();
        let tree = db.open_tree(RATINGS_TREE).unwrap();
        tree.insert(WATCHED_KEY, bytes).unwrap();
        db.flush().unwrap();
    }

    #[test]
    fn test_open_empty_store() {
        let test_store = TestStore::new();
        let store = test_store.store();
        assert!(store.is_empty());
        assert_eq!(store.persisted().unwrap().as_deref(), Some(b"[]".as_slice()));
    }

    #[test]
    fn test_add_and_lookup() {
        let mut test_store = TestStore::new();
        let store = test_store.store_mut();

        store.add(rated("tt1375666", 9)).unwrap();

        assert_eq!(store.len(), 1);
        assert!(store.contains("tt1375666"));
        assert_eq!(store.user_rating("tt1375666"), Some(9));
        assert!((store.summary().mean_user_rating - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_add_then_remove_restores_serialization() {
        let mut test_store = TestStore::new();
        let store = test_store.store_mut();
        store.add(rated("tt0133093", 8)).unwrap();

        let before_entries = store.entries().to_vec();
        let before_bytes = store.persisted().unwrap();

        store.add(rated("tt1375666", 9)).unwrap();
        assert_eq!(store.remove("tt1375666").unwrap(), 1);

        assert_eq!(store.entries(), before_entries.as_slice());
        assert_eq!(store.persisted().unwrap(), before_bytes);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut test_store = TestStore::new();
        let store = test_store.store_mut();
        store.add(rated("tt1", 5)).unwrap();

        assert_eq!(store.remove("tt404").unwrap(), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_drops_all_duplicates() {
        let mut test_store = TestStore::new();
        let store = test_store.store_mut();
        store.add(rated("tt1", 5)).unwrap();
        store.add(rated("tt1", 6)).unwrap();
        store.add(rated("tt2", 7)).unwrap();

        assert_eq!(store.remove("tt1").unwrap(), 2);
        assert_eq!(store.len(), 1);
        assert!(!store.contains("tt1"));
    }

    #[test]
    fn test_entries_survive_reopen() {
        let mut test_store = TestStore::new();
        test_store.store_mut().add(rated("tt1375666", 9)).unwrap();

        let store = test_store.reopen();
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].id, "tt1375666");
    }

    #[test]
    fn test_malformed_data_recovers_empty() {
        let mut test_store = TestStore::new();
        test_store.close();
        write_raw(test_store.path(), b"{not json");

        let store = test_store.reopen();
        assert!(store.is_empty());
        assert_eq!(store.persisted().unwrap().as_deref(), Some(b"[]".as_slice()));
    }

    #[test]
    fn test_null_collection_recovers_empty() {
        let mut test_store = TestStore::new();
        test_store.close();
        write_raw(test_store.path(), b"null");

        let store = test_store.reopen();
        assert!(store.is_empty());
    }
}
