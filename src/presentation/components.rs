//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::core::state::AppState;

pub mod decision_bar;
pub mod review;
pub mod status_bar;

pub use decision_bar::DecisionBarComponent;
pub use review::ReviewComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub review: ReviewComponent,
    pub decision_bar: DecisionBarComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render all components
    ///
    /// This is the main rendering entry point that delegates to individual components.
    /// Returns the scroll limit of the record on screen, if any.
    pub fn render(&self, frame: &mut Frame, state: &AppState) -> Option<u16> {
        let area = frame.area();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Min(0),    // Record or notice
                Constraint::Length(2), // Decision key hints
                Constraint::Length(2), // Status bar (2 rows)
            ])
            .split(area);

        let max_scroll = self.review.view(state, frame, layout[0]);
        self.decision_bar.view(state, frame, layout[1]);
        self.status_bar.view(state, frame, layout[2]);
        max_scroll
    }
}
