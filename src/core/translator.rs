use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{review::ReviewMsg, system::SystemMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // Get keybindings from config state (flat mapping)
    match state.config.config.keybindings.get(&vec![key]) {
        Some(action) => translate_action_to_msg(*action),
        None => vec![], // No matching keybinding found
    }
}

fn translate_action_to_msg(action: Action) -> Vec<Msg> {
    if let Some(review_action) = action.review_action() {
        return vec![Msg::Review(ReviewMsg::Apply(review_action))];
    }
    match action {
        Action::Export => vec![Msg::Review(ReviewMsg::RequestExport)],
        Action::ScrollUp => vec![Msg::Ui(UiMsg::ScrollUp)],
        Action::ScrollDown => vec![Msg::Ui(UiMsg::ScrollDown)],
        Action::ScrollToTop => vec![Msg::Ui(UiMsg::ScrollToTop)],
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::Include
        | Action::ExcludeNotBoard
        | Action::ExcludeNotEthics
        | Action::ExcludeOther
        | Action::Discuss => vec![],
    }
}
