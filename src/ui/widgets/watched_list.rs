//! Rated collection widget with its summary line

use super::scroll_offset;
use crate::models::RatedEntry;
use crate::store::WatchedSummary;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

pub struct WatchedList<'a> {
    entries: &'a [RatedEntry],
    summary: WatchedSummary,
    cursor: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> WatchedList<'a> {
    #[must_use]
    pub const fn new(entries: &'a [RatedEntry], summary: WatchedSummary, theme: &'a Theme) -> Self {
        Self {
            entries,
            summary,
            cursor: 0,
            focused: false,
            theme,
        }
    }

    #[must_use]
    pub const fn cursor(mut self, cursor: usize, focused: bool) -> Self {
        self.cursor = cursor;
        self.focused = focused;
        self
    }

    fn summary_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled("IMDb ", self.theme.dimmed_style()),
            Span::raw(format!("{:.2}", self.summary.mean_imdb_rating)),
            Span::styled("  You ", self.theme.dimmed_style()),
            Span::styled(
                format!("{:.2}", self.summary.mean_user_rating),
                self.theme.star_style(),
            ),
            Span::styled("  Runtime ", self.theme.dimmed_style()),
            Span::raw(format!("{:.0} min", self.summary.mean_runtime)),
        ])
    }

    fn render_entry(&self, entry: &'a RatedEntry, is_cursor: bool) -> ListItem<'a> {
        let cursor_char = if is_cursor && self.focused { ">" } else { " " };
        let line = Line::from(vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
            Span::raw(entry.title.as_str()),
            Span::styled(
                format!("  ★ {}  IMDb {:.1}  {} min", entry.user_rating, entry.imdb_rating, entry.runtime),
                self.theme.dimmed_style(),
            ),
        ]);
        let item = ListItem::new(line);
        if is_cursor && self.focused {
            item.style(self.theme.selected_style())
        } else {
            item
        }
    }
}

impl Widget for WatchedList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.pane_border(self.focused))
            .title(format!(" Watched ({}) ", self.summary.count));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let [summary_area, list_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
        Paragraph::new(self.summary_line()).render(summary_area, buf);

        if self.entries.is_empty() {
            Paragraph::new(Line::styled(
                "No rated movies yet",
                self.theme.dimmed_style(),
            ))
            .render(list_area, buf);
            return;
        }

        let height = list_area.height as usize;
        let start = scroll_offset(self.cursor, height);
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .enumerate()
            .skip(start)
            .take(height)
            .map(|(idx, entry)| self.render_entry(entry, idx == self.cursor))
            .collect();

        List::new(items).render(list_area, buf);
    }
}
