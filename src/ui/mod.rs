//! Terminal user interface
//!
//! A thin ratatui front end over [`Session`](crate::session::Session):
//! keystrokes become session calls and every frame is drawn from the
//! session's state plus a little presentation state of its own (focus,
//! cursors, status messages).
//!
//! ```text
//! ┌ Search ─────────────────────────────────────────┐
//! └─────────────────────────────────────────────────┘
//! ┌ Results ───────────┐┌ Details ─────────────────┐
//! │                    ││                          │
//! │                    │└──────────────────────────┘
//! │                    │┌ Watched ─────────────────┐
//! └────────────────────┘└──────────────────────────┘
//! ┌ Status ─────────────────────────────────────────┐
//! └─────────────────────────────────────────────────┘
//!  hints
//! ```

mod app;
mod error;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use app::run;
pub use error::{Result, UiError};
pub use events::{EventResult, digit_rating, handle_key, set_input};
pub use state::{Focus, MessageLevel, Mode, StatusMessage, UiState};
pub use theme::Theme;
