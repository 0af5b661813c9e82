//! Terminal setup and the async event loop

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};
use tokio::time::MissedTickBehavior;

use super::error::{Result, UiError};
use super::events::{handle_key, set_input};
use super::state::{Focus, Mode, UiState};
use super::theme::Theme;
use super::widgets::{
    DetailsPane, HelpBar, HelpOverlay, ResultList, SearchBar, StatusBar, WatchedList,
};
use crate::api::MovieApi;
use crate::session::Session;

/// Redraw interval when nothing else happens (message expiry)
const TICK: Duration = Duration::from_millis(250);

/// Setup terminal for TUI
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(Into::into)
}

/// Cleanup terminal after TUI
fn cleanup_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the interactive UI until the user quits
///
/// # Errors
///
/// Returns `UiError` if the terminal cannot be set up, drawn to or read.
pub async fn run<A: MovieApi + ?Sized + 'static>(
    session: &mut Session<A>,
    initial_query: Option<String>,
) -> Result<()> {
    let mut terminal = setup_terminal()?;

    let result = run_loop(&mut terminal, session, initial_query).await;
    session.shutdown();

    // Cleanup always runs; the loop's own error wins.
    if let Err(e) = cleanup_terminal() {
        tracing::warn!(error = %e, "Terminal cleanup failed");
    }

    result
}

async fn run_loop<A: MovieApi + ?Sized + 'static>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &mut Session<A>,
    initial_query: Option<String>,
) -> Result<()> {
    let theme = Theme::default();
    let mut state = UiState::new();
    if let Some(query) = initial_query {
        set_input(&mut state, session, query);
    }

    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(TICK);
    tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        state.prune_messages();
        state.clamp_cursors(session.search().results().len(), session.store().len());

        terminal.draw(|frame| render(frame, &state, session, &theme))?;

        if state.should_exit {
            return Ok(());
        }

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    handle_key(&mut state, session, key);
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => return Err(UiError::InputClosed),
            },
            () = session.next_update() => {
                session.poll();
            }
            _ = tick.tick() => {}
        }
    }
}

fn render<A: MovieApi + ?Sized + 'static>(
    frame: &mut Frame,
    state: &UiState,
    session: &Session<A>,
    theme: &Theme,
) {
    let [search_area, content_area, status_area, help_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let [results_area, right_area] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .areas(content_area);
    let [details_area, watched_area] =
        Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)])
            .areas(right_area);

    let search = session.search();
    frame.render_widget(
        SearchBar::new(&state.input, state.input_cursor, theme)
            .focused(state.focus == Focus::Search)
            .loading(search.is_loading())
            .min_len(search.options().min_query_len),
        search_area,
    );

    frame.render_widget(
        ResultList::new(search.state(), session.store(), session.selected(), theme)
            .cursor(state.results_cursor, state.focus == Focus::Results),
        results_area,
    );

    frame.render_widget(
        DetailsPane::new(session.detail().state(), theme)
            .ratings(session.detail().user_rating(), session.selected_rating()),
        details_area,
    );

    frame.render_widget(
        WatchedList::new(session.store().entries(), session.summary(), theme)
            .cursor(state.watched_cursor, state.focus == Focus::Watched),
        watched_area,
    );

    let indicator = format!("{} watched", session.store().len());
    frame.render_widget(
        StatusBar::new(state.latest_message(), &indicator, theme),
        status_area,
    );
    frame.render_widget(HelpBar::new(state.focus, theme), help_area);

    if state.mode == Mode::Help {
        frame.render_widget(HelpOverlay::new(theme), frame.area());
    }
}
