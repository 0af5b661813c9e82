//! Help overlay widget for displaying the full keybind reference

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Calculate centered area for the overlay
    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    fn heading(&self, text: &'static str) -> Line<'static> {
        Line::styled(text, self.theme.cursor_style().add_modifier(Modifier::UNDERLINED))
    }

    fn build_content(&self) -> Vec<Line<'static>> {
        vec![
            Line::default(),
            self.heading("  Search"),
            Line::default(),
            Self::help_line("  Type", "Search as you type (3+ characters)"),
            Self::help_line("  Ctrl+U", "Clear query"),
            Self::help_line("  ↓ / Enter", "Go to results"),
            Line::default(),
            self.heading("  Results and watched list"),
            Line::default(),
            Self::help_line("  ↑/↓", "Move cursor"),
            Self::help_line("  Space", "Open or close details"),
            Self::help_line("  1-9, 0", "Pick a rating (0 = 10)"),
            Self::help_line("  a", "Add the open movie to watched"),
            Self::help_line("  d / Del", "Remove from watched"),
            Self::help_line("  Enter", "New search"),
            Line::default(),
            self.heading("  General"),
            Line::default(),
            Self::help_line("  Tab", "Next pane"),
            Self::help_line("  Esc", "Close details, then quit"),
            Self::help_line("  Ctrl+C", "Quit"),
            Line::default(),
            Line::styled("  Press any key to close", self.theme.dimmed_style()),
            Line::default(),
        ]
    }

    fn help_line(key: &'static str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{key:<14}"), Style::default().fg(Color::Cyan)),
            Span::raw(desc),
        ])
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(60, 80, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .render(popup_area, buf);
    }
}
