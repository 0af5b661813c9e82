//! Presentation state for the ratatui TUI
//!
//! Everything the core owns (query results, detail record, rated
//! collection) lives in the [`Session`](crate::session::Session); this is
//! only what the terminal needs on top: focus, cursors, the text input
//! buffer and transient status messages.

use std::time::{Duration, Instant};

/// Which pane receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Query input
    #[default]
    Search,
    /// Search result list
    Results,
    /// Rated collection
    Watched,
}

impl Focus {
    /// Next pane in Tab order
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Search => Self::Results,
            Self::Results => Self::Watched,
            Self::Watched => Self::Search,
        }
    }

    /// Previous pane in Tab order
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Search => Self::Watched,
            Self::Results => Self::Search,
            Self::Watched => Self::Results,
        }
    }
}

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
}

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Error,
    Info,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level (success, error, info)
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Terminal-side state
#[derive(Debug)]
pub struct UiState {
    pub focus: Focus,
    pub mode: Mode,
    /// Text shown in the search bar
    pub input: String,
    /// Byte offset of the cursor within `input`
    pub input_cursor: usize,
    pub results_cursor: usize,
    pub watched_cursor: usize,
    pub messages: Vec<StatusMessage>,
    pub message_ttl: Duration,
    pub should_exit: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            focus: Focus::Search,
            mode: Mode::Normal,
            input: String::new(),
            input_cursor: 0,
            results_cursor: 0,
            watched_cursor: 0,
            messages: Vec::new(),
            message_ttl: Duration::from_secs(5),
            should_exit: false,
        }
    }

    /// Insert a character at the cursor
    pub fn input_push(&mut self, c: char) {
        self.input.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
    }

    /// Remove the character before the cursor; `false` if nothing changed
    pub fn input_backspace(&mut self) -> bool {
        if self.input_cursor == 0 {
            return false;
        }
        let prev = self.input[..self.input_cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        self.input.remove(prev);
        self.input_cursor = prev;
        true
    }

    /// Delete the character under the cursor; `false` if nothing changed
    pub fn input_delete(&mut self) -> bool {
        if self.input_cursor < self.input.len() {
            self.input.remove(self.input_cursor);
            true
        } else {
            false
        }
    }

    pub fn input_cursor_left(&mut self) {
        if self.input_cursor > 0 {
            self.input_cursor = self.input[..self.input_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    pub fn input_cursor_right(&mut self) {
        if self.input_cursor < self.input.len() {
            self.input_cursor = self.input[self.input_cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.input.len(), |(i, _)| self.input_cursor + i);
        }
    }

    /// Replace the whole input and put the cursor at the end
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.input_cursor = self.input.len();
    }

    /// Keep both list cursors inside their lists
    pub const fn clamp_cursors(&mut self, results: usize, watched: usize) {
        if self.results_cursor >= results {
            self.results_cursor = results.saturating_sub(1);
        }
        if self.watched_cursor >= watched {
            self.watched_cursor = watched.saturating_sub(1);
        }
    }

    pub fn add_message(&mut self, level: MessageLevel, text: impl Into<String>) {
        self.messages.push(StatusMessage::new(level, text.into()));
    }

    /// Drop expired messages
    pub fn prune_messages(&mut self) {
        let ttl = self.message_ttl;
        self.messages.retain(|m| !m.is_expired(ttl));
    }

    /// Most recent message, if any
    #[must_use]
    pub fn latest_message(&self) -> Option<&StatusMessage> {
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle() {
        assert_eq!(Focus::Search.next(), Focus::Results);
        assert_eq!(Focus::Watched.next(), Focus::Search);
        assert_eq!(Focus::Search.prev(), Focus::Watched);
        assert_eq!(Focus::Results.prev().next(), Focus::Results);
    }

    #[test]
    fn test_input_editing() {
        let mut state = UiState::new();
        for c in "heat".chars() {
            state.input_push(c);
        }
        assert_eq!(state.input, "heat");

        state.input_cursor_left();
        state.input_cursor_left();
        state.input_push('x');
        assert_eq!(state.input, "hexat");

        assert!(state.input_delete());
        assert_eq!(state.input, "hext");

        assert!(state.input_backspace());
        assert_eq!(state.input, "het");
        assert_eq!(state.input_cursor, 2);
    }

    #[test]
    fn test_input_multibyte() {
        let mut state = UiState::new();
        state.set_input("amélie");
        state.input_cursor_left();
        state.input_cursor_left();
        state.input_cursor_left();
        state.input_cursor_left();
        assert!(state.input_backspace());
        assert_eq!(state.input, "aélie");
        state.input_cursor_right();
        assert_eq!(state.input_cursor, 3);
    }

    #[test]
    fn test_backspace_at_start() {
        let mut state = UiState::new();
        assert!(!state.input_backspace());
        assert!(!state.input_delete());
    }

    #[test]
    fn test_clamp_cursors() {
        let mut state = UiState::new();
        state.results_cursor = 9;
        state.watched_cursor = 3;
        state.clamp_cursors(4, 0);
        assert_eq!(state.results_cursor, 3);
        assert_eq!(state.watched_cursor, 0);
    }

    #[test]
    fn test_message_expiry() {
        let mut state = UiState::new();
        state.message_ttl = Duration::ZERO;
        state.add_message(MessageLevel::Info, "hello");
        std::thread::sleep(Duration::from_millis(2));
        state.prune_messages();
        assert!(state.latest_message().is_none());
    }
}
