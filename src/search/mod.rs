//! Query-driven movie search
//!
//! Turns a rapidly changing query string into at most one live request per
//! settled query and exposes the derived `{results, is_loading, error}`
//! state.

mod controller;
mod state;

pub use controller::{DEFAULT_DEBOUNCE, MIN_QUERY_LEN, SearchController, SearchOptions};
pub use state::{SearchPhase, SearchState};
