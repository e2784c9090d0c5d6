use ratatui::{prelude::*, widgets::*};

use crate::domain::review::Progress;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewContext<'a> {
    pub file_name: Option<&'a str>,
    pub progress: Option<Progress>,
    pub message: Option<&'a str>,
    pub is_error: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatusBarStyles {
    pub progress: Style,
    pub status: Style,
    pub error: Style,
}

/// Two rows: progress gauge with the file name, then the status message
pub struct StatusBarWidget<'a> {
    ctx: ViewContext<'a>,
    styles: StatusBarStyles,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(ctx: ViewContext<'a>) -> Self {
        Self {
            ctx,
            styles: StatusBarStyles::default(),
        }
    }

    pub fn styles(mut self, styles: StatusBarStyles) -> Self {
        self.styles = styles;
        self
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [info, message] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let file_name = self.ctx.file_name.unwrap_or_default();
        let [gauge_area, name_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(u16::try_from(file_name.len()).unwrap_or(u16::MAX)),
        ])
        .spacing(1)
        .areas(info);

        if let Some(progress) = self.ctx.progress {
            LineGauge::default()
                .ratio(progress.ratio().clamp(0.0, 1.0))
                .label(progress.to_string())
                .filled_style(self.styles.progress)
                .render(gauge_area, buf);
        }
        Paragraph::new(Span::styled(file_name, self.styles.status.add_modifier(Modifier::ITALIC)))
            .alignment(Alignment::Right)
            .render(name_area, buf);

        let style = if self.ctx.is_error {
            self.styles.error
        } else {
            self.styles.status
        };
        Paragraph::new(Span::styled(self.ctx.message.unwrap_or_default(), style))
            .render(message, buf);
    }
}
