//! Search result list widget

use super::scroll_offset;
use crate::models::SearchResult;
use crate::search::SearchState;
use crate::store::RatedStore;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

/// Lists the current search results, or the loading/error placeholder
pub struct ResultList<'a> {
    state: &'a SearchState,
    store: &'a RatedStore,
    selected: Option<&'a str>,
    cursor: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ResultList<'a> {
    #[must_use]
    pub const fn new(
        state: &'a SearchState,
        store: &'a RatedStore,
        selected: Option<&'a str>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            state,
            store,
            selected,
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

    fn render_item(&self, hit: &'a SearchResult, is_cursor: bool) -> ListItem<'a> {
        let cursor_char = if is_cursor && self.focused { ">" } else { " " };
        let open_char = if self.selected == Some(hit.id.as_str()) { "•" } else { " " };
        let rated = self.store.user_rating(&hit.id);

        let mut spans = vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::styled(open_char, self.theme.info_style()),
            Span::raw(" "),
            Span::raw(hit.title.as_str()),
            Span::styled(format!(" ({})", hit.year), self.theme.dimmed_style()),
        ];
        if let Some(rating) = rated {
            spans.push(Span::styled(format!("  ★ {rating}"), self.theme.star_style()));
        }

        let item = ListItem::new(Line::from(spans));
        if is_cursor && self.focused {
            item.style(self.theme.selected_style())
        } else {
            item
        }
    }
}

impl Widget for ResultList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" Results ({}) ", self.state.results.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.pane_border(self.focused))
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.state.is_loading {
            Paragraph::new(Line::styled("Loading...", self.theme.info_style())).render(inner, buf);
            return;
        }
        if let Some(error) = &self.state.error {
            Paragraph::new(Line::styled(error.as_str(), self.theme.error_style()))
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            return;
        }

        let height = inner.height as usize;
        let start = scroll_offset(self.cursor, height);
        let items: Vec<ListItem> = self
            .state
            .results
            .iter()
            .enumerate()
            .skip(start)
            .take(height)
            .map(|(idx, hit)| self.render_item(hit, idx == self.cursor))
            .collect();

        List::new(items).render(inner, buf);
    }
}
