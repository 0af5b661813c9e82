//! Keyboard handling for the TUI
//!
//! Maps key presses to [`Session`] calls and presentation-state changes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{Focus, MessageLevel, Mode, UiState};
use crate::api::MovieApi;
use crate::detail::MAX_RATING;
use crate::session::Session;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Something changed, keep running
    Continue,
    /// Key has no meaning in the current context
    Ignored,
    /// Leave the application
    Exit,
}

/// Rating for a digit key: `1`..`9` as-is, `0` means 10
#[must_use]
pub fn digit_rating(c: char) -> Option<u8> {
    match c.to_digit(10)? {
        0 => Some(MAX_RATING),
        // Digits are below 10.
        #[allow(clippy::cast_possible_truncation)]
        d => Some(d as u8),
    }
}

/// Push the input buffer into the session as the new query
fn query_changed<A: MovieApi + ?Sized + 'static>(state: &mut UiState, session: &mut Session<A>) {
    state.results_cursor = 0;
    session.set_query(state.input.clone());
}

/// Replace the input and the query at once
pub fn set_input<A: MovieApi + ?Sized + 'static>(
    state: &mut UiState,
    session: &mut Session<A>,
    text: impl Into<String>,
) {
    state.set_input(text);
    query_changed(state, session);
}

fn exit(state: &mut UiState) -> EventResult {
    state.should_exit = true;
    EventResult::Exit
}

/// Handle one key press
pub fn handle_key<A: MovieApi + ?Sized + 'static>(
    state: &mut UiState,
    session: &mut Session<A>,
    key: KeyEvent,
) -> EventResult {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return exit(state);
    }

    if state.mode == Mode::Help {
        state.mode = Mode::Normal;
        return EventResult::Continue;
    }

    match key.code {
        KeyCode::F(1) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }
        KeyCode::Esc => {
            if session.selected().is_some() {
                session.request_close();
                EventResult::Continue
            } else {
                exit(state)
            }
        }
        KeyCode::Tab => {
            state.focus = state.focus.next();
            EventResult::Continue
        }
        KeyCode::BackTab => {
            state.focus = state.focus.prev();
            EventResult::Continue
        }
        _ => match state.focus {
            Focus::Search => handle_search_key(state, session, key),
            Focus::Results => handle_results_key(state, session, key),
            Focus::Watched => handle_watched_key(state, session, key),
        },
    }
}

fn handle_search_key<A: MovieApi + ?Sized + 'static>(
    state: &mut UiState,
    session: &mut Session<A>,
    key: KeyEvent,
) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            if state.input.is_empty() {
                return EventResult::Ignored;
            }
            set_input(state, session, "");
            EventResult::Continue
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.input_push(c);
            query_changed(state, session);
            EventResult::Continue
        }
        (KeyCode::Backspace, _) => {
            if state.input_backspace() {
                query_changed(state, session);
                EventResult::Continue
            } else {
                EventResult::Ignored
            }
        }
        (KeyCode::Delete, _) => {
            if state.input_delete() {
                query_changed(state, session);
                EventResult::Continue
            } else {
                EventResult::Ignored
            }
        }
        (KeyCode::Left, _) => {
            state.input_cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.input_cursor_right();
            EventResult::Continue
        }
        (KeyCode::Down | KeyCode::Enter, _) => {
            if session.search().results().is_empty() {
                EventResult::Ignored
            } else {
                state.focus = Focus::Results;
                EventResult::Continue
            }
        }
        _ => EventResult::Ignored,
    }
}

/// Keys shared by the two list panes: Enter jumps back to a fresh search,
/// digits pick a rating and `a` commits it.
fn handle_pane_key<A: MovieApi + ?Sized + 'static>(
    state: &mut UiState,
    session: &mut Session<A>,
    key: KeyEvent,
) -> EventResult {
    match key.code {
        KeyCode::Enter => {
            state.focus = Focus::Search;
            set_input(state, session, "");
            EventResult::Continue
        }
        KeyCode::Char('a') => {
            commit_rating(state, session);
            EventResult::Continue
        }
        KeyCode::Char(c) => match digit_rating(c) {
            Some(rating) if session.detail().record().is_some() && !session.is_selected_rated() => {
                session.rate(rating);
                EventResult::Continue
            }
            _ => EventResult::Ignored,
        },
        _ => EventResult::Ignored,
    }
}

fn commit_rating<A: MovieApi + ?Sized + 'static>(state: &mut UiState, session: &mut Session<A>) {
    let title = session
        .detail()
        .record()
        .map(|record| record.title.clone())
        .unwrap_or_default();
    let rating = session.detail().user_rating();

    match session.commit_rating() {
        Ok(()) => state.add_message(
            MessageLevel::Success,
            format!("Added {title} to watched ({rating}/10)"),
        ),
        Err(e) => state.add_message(MessageLevel::Error, e.to_string()),
    }
}

fn handle_results_key<A: MovieApi + ?Sized + 'static>(
    state: &mut UiState,
    session: &mut Session<A>,
    key: KeyEvent,
) -> EventResult {
    let count = session.search().results().len();
    match key.code {
        KeyCode::Up => {
            if state.results_cursor == 0 {
                state.focus = Focus::Search;
            } else {
                state.results_cursor -= 1;
            }
            EventResult::Continue
        }
        KeyCode::Down => {
            if state.results_cursor + 1 < count {
                state.results_cursor += 1;
            }
            EventResult::Continue
        }
        KeyCode::Home => {
            state.results_cursor = 0;
            EventResult::Continue
        }
        KeyCode::End => {
            state.results_cursor = count.saturating_sub(1);
            EventResult::Continue
        }
        KeyCode::Char(' ') => {
            let Some(id) = session
                .search()
                .results()
                .get(state.results_cursor)
                .map(|hit| hit.id.clone())
            else {
                return EventResult::Ignored;
            };
            session.toggle_selection(&id);
            EventResult::Continue
        }
        _ => handle_pane_key(state, session, key),
    }
}

fn handle_watched_key<A: MovieApi + ?Sized + 'static>(
    state: &mut UiState,
    session: &mut Session<A>,
    key: KeyEvent,
) -> EventResult {
    let count = session.store().len();
    match key.code {
        KeyCode::Up => {
            state.watched_cursor = state.watched_cursor.saturating_sub(1);
            EventResult::Continue
        }
        KeyCode::Down => {
            if state.watched_cursor + 1 < count {
                state.watched_cursor += 1;
            }
            EventResult::Continue
        }
        KeyCode::Char(' ') => {
            let Some(id) = session
                .store()
                .entries()
                .get(state.watched_cursor)
                .map(|entry| entry.id.clone())
            else {
                return EventResult::Ignored;
            };
            session.toggle_selection(&id);
            EventResult::Continue
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            let Some(entry) = session.store().entries().get(state.watched_cursor) else {
                return EventResult::Ignored;
            };
            let (id, title) = (entry.id.clone(), entry.title.clone());
            match session.remove_rating(&id) {
                Ok(_) => state.add_message(MessageLevel::Info, format!("Removed {title}")),
                Err(e) => state.add_message(MessageLevel::Error, e.to_string()),
            }
            state.clamp_cursors(session.search().results().len(), session.store().len());
            EventResult::Continue
        }
        _ => handle_pane_key(state, session, key),
    }
}
