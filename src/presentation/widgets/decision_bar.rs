use ratatui::{prelude::*, widgets::*};

/// Key hints for the decision commands, e.g. `[i] Include  [b] Exclude - Not Board`
#[derive(Debug, Clone, Default)]
pub struct DecisionBarWidget {
    hints: Vec<(String, String)>,
    key_style: Style,
    dimmed: bool,
}

impl DecisionBarWidget {
    pub fn new(hints: Vec<(String, String)>) -> Self {
        Self {
            hints,
            ..Default::default()
        }
    }

    pub fn key_style(mut self, style: Style) -> Self {
        self.key_style = style;
        self
    }

    /// Grey out the hints when there is nothing to classify
    pub fn dimmed(mut self, dimmed: bool) -> Self {
        self.dimmed = dimmed;
        self
    }

    pub fn line(&self) -> Line<'_> {
        let label_style = if self.dimmed {
            Style::default().add_modifier(Modifier::DIM)
        } else {
            Style::default()
        };
        let spans = self
            .hints
            .iter()
            .enumerate()
            .flat_map(|(i, (key, label))| {
                let sep = if i == 0 { "" } else { "  " };
                [
                    Span::raw(sep),
                    Span::styled(format!("[{key}]"), self.key_style),
                    Span::styled(format!(" {label}"), label_style),
                ]
            })
            .collect::<Vec<_>>();
        Line::from(spans)
    }
}

impl Widget for DecisionBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line())
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn hints() -> Vec<(String, String)> {
        vec![
            ("i".to_string(), "Include".to_string()),
            ("b".to_string(), "Exclude - Not Board".to_string()),
        ]
    }

    #[test]
    fn test_line_text() {
        let widget = DecisionBarWidget::new(hints());
        assert_eq!(
            widget.line().to_string(),
            "[i] Include  [b] Exclude - Not Board"
        );
    }

    #[test]
    fn test_key_style() {
        let style = Style::default().fg(Color::Cyan);
        let widget = DecisionBarWidget::new(hints()).key_style(style);
        let line = widget.line();
        assert_eq!(line.spans[1].style, style);
        assert_eq!(line.spans[2].style, Style::default());
    }

    #[test]
    fn test_dimmed_labels() {
        let widget = DecisionBarWidget::new(hints()).dimmed(true);
        let line = widget.line();
        assert!(line.spans[2].style.add_modifier.contains(Modifier::DIM));
    }
}
