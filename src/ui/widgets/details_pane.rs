//! Detail pane for the selected movie

use crate::detail::{DetailState, MAX_RATING};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Shows the loaded record plus the rating controls
pub struct DetailsPane<'a> {
    state: &'a DetailState,
    /// Rating picked but not committed
    pending_rating: u8,
    /// Rating already in the store
    stored_rating: Option<u8>,
    theme: &'a Theme,
}

impl<'a> DetailsPane<'a> {
    #[must_use]
    pub const fn new(state: &'a DetailState, theme: &'a Theme) -> Self {
        Self {
            state,
            pending_rating: 0,
            stored_rating: None,
            theme,
        }
    }

    #[must_use]
    pub const fn ratings(mut self, pending: u8, stored: Option<u8>) -> Self {
        self.pending_rating = pending;
        self.stored_rating = stored;
        self
    }

    fn field(&self, label: &'static str, value: &'a str) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!("{label:<10}"), self.theme.label_style()),
            Span::raw(value),
        ])
    }

    fn stars(&self, rating: u8) -> Line<'a> {
        let filled = usize::from(rating.min(MAX_RATING));
        let empty = usize::from(MAX_RATING) - filled;
        Line::from(vec![
            Span::styled("★".repeat(filled), self.theme.star_style()),
            Span::styled("☆".repeat(empty), self.theme.dimmed_style()),
        ])
    }

    fn rating_lines(&self) -> Vec<Line<'a>> {
        if let Some(rating) = self.stored_rating {
            return vec![
                Line::styled(
                    format!("You rated this movie {rating}/10"),
                    self.theme.success_style(),
                ),
                self.stars(rating),
            ];
        }

        let mut lines = vec![self.stars(self.pending_rating)];
        if self.pending_rating == 0 {
            lines.push(Line::styled(
                "Press 1-9 (0 for 10) to rate",
                self.theme.dimmed_style(),
            ));
        } else {
            lines.push(Line::from(vec![
                Span::raw(format!("{}/10  ", self.pending_rating)),
                Span::styled("press a to add to watched", self.theme.dimmed_style()),
            ]));
        }
        lines
    }
}

impl Widget for DetailsPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Details ");

        let lines = if self.state.is_loading {
            vec![Line::styled("Loading...", self.theme.info_style())]
        } else if let Some(error) = &self.state.error {
            vec![Line::styled(error.as_str(), self.theme.error_style())]
        } else if let Some(record) = &self.state.record {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled(
                        record.title.as_str(),
                        self.theme.normal_style().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!(" ({})", record.year), self.theme.dimmed_style()),
                ]),
                Line::default(),
                self.field("Released", &record.released),
                self.field("Runtime", &record.runtime),
                self.field("Genre", &record.genre),
                self.field("IMDb", &record.imdb_rating),
                self.field("Director", &record.director),
                self.field("Starring", &record.actors),
                Line::default(),
                Line::styled(
                    record.plot.as_str(),
                    self.theme.normal_style().add_modifier(Modifier::ITALIC),
                ),
                Line::default(),
            ];
            lines.extend(self.rating_lines());
            lines
        } else {
            vec![Line::styled(
                "Select a movie with Space to see its details",
                self.theme.dimmed_style(),
            )]
        };

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
