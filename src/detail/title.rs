//! Process-wide title indicator scoped to the detail view
//!
//! While a record is on screen the title reads `Movie | <title>`; releasing
//! the scope puts the default back. The scope also releases on drop.

use std::io;

use crossterm::{execute, terminal::SetTitle};

/// Title shown when no detail view is open
pub const DEFAULT_TITLE: &str = "CineMate";

/// Something that can display a title (terminal window, test recorder, ...)
pub trait TitleSink: Send {
    fn set_title(&mut self, title: &str);
}

/// Sets the terminal window title
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalTitle;

impl TitleSink for TerminalTitle {
    fn set_title(&mut self, title: &str) {
        if let Err(e) = execute!(io::stdout(), SetTitle(title)) {
            tracing::debug!(error = %e, "Could not set terminal title");
        }
    }
}

/// Discards titles (non-interactive commands)
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTitle;

impl TitleSink for NoTitle {
    fn set_title(&mut self, _title: &str) {}
}

/// Acquire/release pair around the title indicator
pub struct TitleScope {
    sink: Box<dyn TitleSink>,
    default_title: String,
    active: bool,
}

impl TitleScope {
    #[must_use]
    pub fn new(sink: impl TitleSink + 'static, default_title: impl Into<String>) -> Self {
        Self {
            sink: Box::new(sink),
            default_title: default_title.into(),
            active: false,
        }
    }

    /// Show `title` until released; empty titles are ignored
    pub fn acquire(&mut self, title: &str) {
        if title.is_empty() {
            return;
        }
        self.sink.set_title(&format!("Movie | {title}"));
        self.active = true;
    }

    /// Restore the default title if one was acquired
    pub fn release(&mut self) {
        if self.active {
            self.sink.set_title(&self.default_title);
            self.active = false;
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }
}

impl Drop for TitleScope {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingTitle;

    #[test]
    fn test_acquire_then_release() {
        let recorder = RecordingTitle::new();
        let mut scope = TitleScope::new(recorder.clone(), DEFAULT_TITLE);

        scope.acquire("Inception");
        assert!(scope.is_active());
        assert_eq!(recorder.current().as_deref(), Some("Movie | Inception"));

        scope.release();
        assert!(!scope.is_active());
        assert_eq!(recorder.current().as_deref(), Some("CineMate"));
    }

    #[test]
    fn test_empty_title_is_not_acquired() {
        let recorder = RecordingTitle::new();
        let mut scope = TitleScope::new(recorder.clone(), DEFAULT_TITLE);

        scope.acquire("");
        scope.release();

        assert!(recorder.history().is_empty());
    }

    #[test]
    fn test_drop_releases() {
        let recorder = RecordingTitle::new();
        {
            let mut scope = TitleScope::new(recorder.clone(), "Default");
            scope.acquire("Heat");
        }
        assert_eq!(recorder.history(), vec!["Movie | Heat", "Default"]);
    }
}
