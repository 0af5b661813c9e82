//! Search bar widget for query input

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the query with cursor
pub struct SearchBar<'a> {
    query: &'a str,
    /// Byte offset of the cursor in the query
    cursor: usize,
    theme: &'a Theme,
    focused: bool,
    loading: bool,
    min_len: usize,
}

impl<'a> SearchBar<'a> {
    #[must_use]
    pub const fn new(query: &'a str, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            query,
            cursor,
            theme,
            focused: true,
            loading: false,
            min_len: 0,
        }
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Show a loading marker in the title
    #[must_use]
    pub const fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Hint shown while the query is shorter than `min_len`
    #[must_use]
    pub const fn min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.loading {
            " Search (loading...) "
        } else {
            " Search "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.pane_border(self.focused))
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        let caret = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));
        let mut spans = vec![Span::styled(">", self.theme.dimmed_style()), Span::raw(" ")];

        if self.query.is_empty() {
            if self.focused {
                spans.push(caret);
            }
            spans.push(Span::styled(
                "Search movies...",
                self.theme.dimmed_style(),
            ));
        } else {
            let (before, after) = self.query.split_at(self.cursor.min(self.query.len()));
            spans.push(Span::raw(before));
            if self.focused {
                spans.push(caret);
            }
            spans.push(Span::raw(after));

            if self.query.trim().chars().count() < self.min_len {
                spans.push(Span::styled(
                    format!("  (type at least {} characters)", self.min_len),
                    self.theme.dimmed_style(),
                ));
            }
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
