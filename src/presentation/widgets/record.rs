use ratatui::{prelude::*, widgets::*};

use crate::{
    domain::{
        highlight::Highlighted,
        table::{Record, PUBLICATION_TITLE, PUBLICATION_YEAR, TITLE},
    },
    presentation::widgets::highlighted_text::{wrapped_height, HighlightedText},
};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RecordStyles {
    pub title: Style,
    pub meta: Style,
    pub label: Style,
    pub highlight: Style,
}

/// One bibliographic record: title, year and venue, and the abstract with
/// keywords marked
pub struct RecordWidget<'a> {
    record: Record<'a>,
    abstract_note: &'a Highlighted,
    styles: RecordStyles,
    scroll: u16,
}

impl<'a> RecordWidget<'a> {
    pub fn new(record: Record<'a>, abstract_note: &'a Highlighted) -> Self {
        Self {
            record,
            abstract_note,
            styles: RecordStyles::default(),
            scroll: 0,
        }
    }

    pub fn styles(mut self, styles: RecordStyles) -> Self {
        self.styles = styles;
        self
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    /// `**year** | *publication title*`
    pub fn meta_line(&self) -> Line<'a> {
        Line::from(vec![
            Span::styled(
                self.record.value(PUBLICATION_YEAR),
                self.styles.meta.add_modifier(Modifier::BOLD),
            ),
            Span::styled(" | ", self.styles.meta),
            Span::styled(
                self.record.value(PUBLICATION_TITLE),
                self.styles.meta.add_modifier(Modifier::ITALIC),
            ),
        ])
    }

    fn areas(&self, area: Rect) -> [Rect; 5] {
        let title_height = u16::try_from(
            wrapped_height(&Text::raw(self.record.value(TITLE)), area.width).min(3),
        )
        .unwrap_or(3);

        Layout::vertical([
            Constraint::Length(title_height),
            Constraint::Length(1), // year | venue
            Constraint::Length(1), // spacer
            Constraint::Length(1), // label
            Constraint::Min(0),    // abstract
        ])
        .areas(area)
    }

    fn abstract_text(&self) -> Text<'a> {
        HighlightedText::new(self.abstract_note)
            .mark_style(self.styles.highlight)
            .text()
    }

    /// Largest scroll offset that still leaves abstract text in `area`
    pub fn max_scroll(&self, area: Rect) -> u16 {
        let [.., body] = self.areas(area);
        let hidden = wrapped_height(&self.abstract_text(), body.width)
            .saturating_sub(usize::from(body.height));
        u16::try_from(hidden).unwrap_or(u16::MAX)
    }
}

impl Widget for RecordWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [title_area, meta_area, _, label_area, body] = self.areas(area);
        let scroll = self.scroll.min(self.max_scroll(area));

        Paragraph::new(self.record.value(TITLE))
            .style(self.styles.title)
            .wrap(Wrap { trim: true })
            .render(title_area, buf);
        Paragraph::new(self.meta_line()).render(meta_area, buf);
        Paragraph::new(Span::styled("Abstract Note:", self.styles.label)).render(label_area, buf);
        Paragraph::new(self.abstract_text())
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .render(body, buf);
    }
}
