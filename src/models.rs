//! Movie records exchanged with the OMDb API and kept in the rating store
//!
//! Field names on the wire follow OMDb's capitalisation (`imdbID`, `Title`,
//! ...). The persisted [`RatedEntry`] keeps the same names so a collection
//! written by an older build stays readable.

use serde::{Deserialize, Deserializer, Serialize};

/// A single hit from a title search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "imdbID")]
    pub id: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    /// Release-year label, e.g. `2010` or `2008–2013`
    #[serde(rename = "Year", default)]
    pub year: String,
    /// Poster URL (or `N/A`)
    #[serde(rename = "Poster", default)]
    pub poster: String,
}

/// Full record for one title, as returned by an `i=<id>` lookup
///
/// Every field is optional upstream; anything missing deserializes as an
/// empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailRecord {
    #[serde(rename = "imdbID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Poster")]
    pub poster: String,
    /// Runtime label, e.g. `148 min`
    #[serde(rename = "Runtime")]
    pub runtime: String,
    /// IMDb score label, e.g. `8.8`
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    #[serde(rename = "Plot")]
    pub plot: String,
    #[serde(rename = "Released")]
    pub released: String,
    #[serde(rename = "Actors")]
    pub actors: String,
    #[serde(rename = "Director")]
    pub director: String,
    #[serde(rename = "Genre")]
    pub genre: String,
}

impl DetailRecord {
    /// Runtime in minutes, taken from the leading number of the label
    ///
    /// Returns 0 for labels such as `N/A`.
    #[must_use]
    pub fn runtime_minutes(&self) -> u32 {
        self.runtime
            .split_whitespace()
            .next()
            .and_then(|n| n.parse().ok())
            .unwrap_or(0)
    }

    /// IMDb score as a number, 0.0 when upstream has none
    #[must_use]
    pub fn imdb_score(&self) -> f64 {
        self.imdb_rating
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|score| score.is_finite())
            .unwrap_or(0.0)
    }
}

/// A title the user has watched and rated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedEntry {
    #[serde(rename = "imdbID")]
    pub id: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
    /// Runtime in minutes
    #[serde(default, deserialize_with = "nullable")]
    pub runtime: u32,
    #[serde(rename = "imdbRating", default, deserialize_with = "nullable")]
    pub imdb_rating: f64,
    /// The user's own score, 1 to 10
    #[serde(rename = "userRating")]
    pub user_rating: u8,
    /// How many times the rating was changed before it was committed
    #[serde(
        rename = "countRatingDecisions",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub count_rating_decisions: Option<u32>,
}

impl RatedEntry {
    /// Build an entry from a loaded record, copying the display fields
    #[must_use]
    pub fn from_record(record: &DetailRecord, user_rating: u8, decisions: Option<u32>) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            year: record.year.clone(),
            poster: record.poster.clone(),
            runtime: record.runtime_minutes(),
            imdb_rating: record.imdb_score(),
            user_rating,
            count_rating_decisions: decisions,
        }
    }
}

// Older collections store `null` where a number could not be parsed.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
