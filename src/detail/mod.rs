//! Detail view for a selected title
//!
//! Fetches the full record for the selected identifier, tracks how often
//! the user changed their rating, and turns a committed rating into a
//! stored [`RatedEntry`](crate::models::RatedEntry).

mod controller;
mod title;

pub use controller::{DetailController, DetailSignal, DetailState, MAX_RATING, RateError};
pub use title::{DEFAULT_TITLE, NoTitle, TerminalTitle, TitleScope, TitleSink};
