use ratatui::prelude::*;
use strum::IntoEnumIterator;

use crate::{
    core::state::AppState,
    domain::{decision::ReviewAction, review::SessionPhase},
    presentation::{
        config::keybindings::{Action, KeyBindings},
        widgets::decision_bar::DecisionBarWidget,
    },
};

/// Key hints for the five decisions plus export and quit
#[derive(Debug, Clone, Default)]
pub struct DecisionBarComponent;

impl DecisionBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let keybindings = &state.config.config.keybindings;
        let widget = DecisionBarWidget::new(Self::hints(keybindings))
            .key_style(
                state
                    .config
                    .config
                    .styles
                    .style_or("key", Style::default().add_modifier(Modifier::BOLD)),
            )
            .dimmed(state.phase() != SessionPhase::Reviewing);
        frame.render_widget(widget, area);
    }

    /// `(key, label)` pairs for every bound action, decisions first
    pub fn hints(keybindings: &KeyBindings) -> Vec<(String, String)> {
        let decisions = ReviewAction::iter().map(|a| (to_key_action(a), a.label()));
        let others = [(Action::Export, "Export"), (Action::Quit, "Quit")];
        decisions
            .chain(others)
            .filter_map(|(action, label)| {
                keybindings
                    .key_for(action)
                    .map(|key| (key, label.to_string()))
            })
            .collect()
    }
}

fn to_key_action(action: ReviewAction) -> Action {
    match action {
        ReviewAction::Include => Action::Include,
        ReviewAction::ExcludeNotBoard => Action::ExcludeNotBoard,
        ReviewAction::ExcludeNotEthics => Action::ExcludeNotEthics,
        ReviewAction::ExcludeOther => Action::ExcludeOther,
        ReviewAction::Discuss => Action::Discuss,
    }
}
