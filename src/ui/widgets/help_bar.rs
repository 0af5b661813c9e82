//! Help bar widget for displaying keybind hints

use crate::ui::state::Focus;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    #[must_use]
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    hints: Vec<KeyHint>,
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    #[must_use]
    pub fn new(focus: Focus, theme: &'a Theme) -> Self {
        Self {
            hints: Self::hints_for(focus),
            theme,
        }
    }

    /// Hints relevant to the focused pane
    #[must_use]
    pub fn hints_for(focus: Focus) -> Vec<KeyHint> {
        let mut hints = match focus {
            Focus::Search => vec![KeyHint::new("Type", "search"), KeyHint::new("↓", "results")],
            Focus::Results => vec![
                KeyHint::new("↑/↓", "move"),
                KeyHint::new("Space", "details"),
                KeyHint::new("1-0", "rate"),
                KeyHint::new("a", "add"),
            ],
            Focus::Watched => vec![
                KeyHint::new("↑/↓", "move"),
                KeyHint::new("Space", "details"),
                KeyHint::new("d", "remove"),
            ],
        };
        hints.extend([
            KeyHint::new("Tab", "pane"),
            KeyHint::new("Esc", "close/quit"),
            KeyHint::new("F1", "help"),
        ]);
        hints
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key, self.theme.cursor_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
