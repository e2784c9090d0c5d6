//! Status bar component
//!
//! Displays review progress, the open file and the latest status message.
//! This is a pure, stateless component that renders status data from AppState.

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    presentation::widgets::status_bar::{StatusBarStyles, StatusBarWidget, ViewContext},
};

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let widget = StatusBarWidget::new(self.view_context(state)).styles(StatusBarStyles {
            progress: styles.style_or("progress", Style::default().fg(Color::Green)),
            status: styles.style("status"),
            error: styles.style_or("error", Style::default().fg(Color::Red)),
        });
        frame.render_widget(widget, area);
    }

    pub fn view_context<'a>(&self, state: &'a AppState) -> ViewContext<'a> {
        ViewContext {
            file_name: state
                .review
                .source
                .as_deref()
                .and_then(|p| p.file_name())
                .and_then(|n| n.to_str()),
            progress: state.review.session.as_ref().map(|s| s.progress()),
            message: state.system.status_message.as_deref(),
            is_error: state.system.status_is_error,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::review::Progress;

    #[test]
    fn test_view_context_from_state() {
        let mut state = AppState::default();
        state.review.source = Some(PathBuf::from("/data/refs.xlsx"));
        state.system.status_message = Some("Error: nope".to_string());
        state.system.status_is_error = true;

        let ctx = StatusBarComponent::new().view_context(&state);

        assert_eq!(ctx.file_name, Some("refs.xlsx"));
        assert_eq!(ctx.progress, None::<Progress>);
        assert_eq!(ctx.message, Some("Error: nope"));
        assert!(ctx.is_error);
    }
}
