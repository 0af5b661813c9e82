//! Ratatui widgets for the cinemate TUI

mod details_pane;
mod help_bar;
mod help_overlay;
mod result_list;
mod search_bar;
mod status_bar;
mod watched_list;

pub use details_pane::DetailsPane;
pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use result_list::ResultList;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
pub use watched_list::WatchedList;

/// First row to draw so that `cursor` stays within `height` rows
#[must_use]
pub const fn scroll_offset(cursor: usize, height: usize) -> usize {
    if height == 0 || cursor < height {
        0
    } else {
        cursor + 1 - height
    }
}
