//! Summary statistics over the rated collection
//!
//! Nothing here is stored; every figure is recomputed from the current
//! entries when asked for.

use crate::models::RatedEntry;

/// Arithmetic mean, 0.0 for an empty input
#[must_use]
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0_usize), |(sum, count), value| (sum + value, count + 1));

    if count == 0 {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let count = count as f64;
        sum / count
    }
}

/// Derived view of the rated collection
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WatchedSummary {
    /// Number of rated titles
    pub count: usize,
    /// Mean IMDb score
    pub mean_imdb_rating: f64,
    /// Mean of the user's own scores
    pub mean_user_rating: f64,
    /// Mean runtime in minutes
    pub mean_runtime: f64,
}

impl WatchedSummary {
    /// Compute the summary for a slice of entries
    #[must_use]
    pub fn from_entries(entries: &[RatedEntry]) -> Self {
        Self {
            count: entries.len(),
            mean_imdb_rating: mean(entries.iter().map(|e| e.imdb_rating)),
            mean_user_rating: mean(entries.iter().map(|e| f64::from(e.user_rating))),
            mean_runtime: mean(entries.iter().map(|e| f64::from(e.runtime))),
        }
    }
}
