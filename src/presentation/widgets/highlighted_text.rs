use ratatui::prelude::*;

use crate::domain::highlight::Highlighted;

/// Turns highlighter output into styled ratatui lines, splitting on newlines
#[derive(Debug, Clone)]
pub struct HighlightedText<'a> {
    highlighted: &'a Highlighted,
    base: Style,
    mark: Style,
}

impl<'a> HighlightedText<'a> {
    pub fn new(highlighted: &'a Highlighted) -> Self {
        Self {
            highlighted,
            base: Style::default(),
            mark: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    pub fn base_style(mut self, style: Style) -> Self {
        self.base = style;
        self
    }

    pub fn mark_style(mut self, style: Style) -> Self {
        self.mark = style;
        self
    }

    pub fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![Line::default()];
        for segment in self.highlighted.segments() {
            let style = if segment.emphasized {
                self.mark
            } else {
                self.base
            };
            for (i, piece) in segment.text.split('\n').enumerate() {
                if i > 0 {
                    lines.push(Line::default());
                }
                let piece = piece.trim_end_matches('\r');
                if !piece.is_empty() {
                    if let Some(line) = lines.last_mut() {
                        line.spans.push(Span::styled(piece, style));
                    }
                }
            }
        }
        lines
    }

    pub fn text(&self) -> Text<'a> {
        Text::from(self.lines())
    }
}

/// Rows needed to show `text` wrapped at `width`, counting characters
pub fn wrapped_height(text: &Text<'_>, width: u16) -> usize {
    let width = usize::from(width.max(1));
    text.lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::highlight::Highlighter;

    #[test]
    fn test_spans_follow_segments() {
        let highlighter = Highlighter::new(["board"]);
        let highlighted = highlighter.highlight(Some("The Board met"));
        let mark = Style::default().bg(Color::Yellow);
        let lines = HighlightedText::new(&highlighted).mark_style(mark).lines();

        assert_eq!(lines.len(), 1);
        let spans: Vec<(&str, Style)> = lines[0]
            .spans
            .iter()
            .map(|s| (s.content.as_ref(), s.style))
            .collect();
        assert_eq!(
            spans,
            vec![
                ("The ", Style::default()),
                ("Board", mark),
                (" met", Style::default()),
            ]
        );
    }

    #[test]
    fn test_newlines_start_new_lines() {
        let highlighter = Highlighter::new(["ethic"]);
        let highlighted = highlighter.highlight(Some("first\r\nethics\n\nlast"));
        let lines = HighlightedText::new(&highlighted).lines();

        let plain: Vec<String> = lines.iter().map(ToString::to_string).collect();
        assert_eq!(plain, vec!["first", "ethics", "", "last"]);
        assert_eq!(lines[1].spans.len(), 2);
    }

    #[test]
    fn test_empty_input_is_one_empty_line() {
        let highlighted = Highlighter::default().highlight(None);
        let lines = HighlightedText::new(&highlighted).lines();
        assert_eq!(lines, vec![Line::default()]);
    }

    #[test]
    fn test_wrapped_height() {
        let text = Text::from(vec![Line::from("abcdefghij"), Line::default()]);
        assert_eq!(wrapped_height(&text, 4), 4);
        assert_eq!(wrapped_height(&text, 20), 2);
    }
}
