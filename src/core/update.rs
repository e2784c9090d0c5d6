use std::path::Path;

use crate::{
    core::{
        cmd::Cmd,
        msg::{review::ReviewMsg, system::SystemMsg, Msg},
        state::{review::ReviewError, AppState},
    },
    domain::review::SessionPhase,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // UI messages (delegated to UiState)
        Msg::Ui(ui_msg) => {
            let commands = state.ui.update(ui_msg);
            (state, commands)
        }

        Msg::Review(review_msg) => update_review(review_msg, state),
    }
}

fn update_review(msg: ReviewMsg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        ReviewMsg::Open(path) => {
            let required = state.config.config.review.required_columns.clone();
            state.system.set_status(format!("Loading {}", path.display()));
            let cmd = state.review.open(path, required);
            (state, vec![cmd])
        }

        ReviewMsg::TableLoaded {
            path,
            format,
            table,
        } => {
            let sort_column = state.config.config.review.sort_column.column_name();
            let name = display_name(&path);
            match state.review.loaded(path, format, table, sort_column) {
                Ok(()) => {
                    state.ui.reset_scroll();
                    let progress = state
                        .review
                        .session
                        .as_ref()
                        .map(|s| s.progress().to_string())
                        .unwrap_or_default();
                    let message = format!("Opened {name} ({progress})");
                    state.system.set_status(message.clone());
                    (state, vec![Cmd::LogInfo { message }])
                }
                Err(e) => {
                    let commands = state.system.update(SystemMsg::ShowError(e.to_string()));
                    (state, commands)
                }
            }
        }

        ReviewMsg::LoadFailed { path, error } => {
            state.review.load_failed(&path, &error);
            let commands = state.system.update(SystemMsg::ShowError(error));
            (state, commands)
        }

        ReviewMsg::Apply(action) => match state.review.classify(action) {
            Ok(title) => {
                state.ui.reset_scroll();
                let mut message = format!("[{}] {title}", action.label());
                if state.review.phase() == SessionPhase::Complete {
                    message.push_str(" - all rows handled");
                }
                state.system.set_status(message);
                (state, vec![])
            }
            // Nothing to classify; the view already says so
            Err(ReviewError::NotLoaded | ReviewError::Complete) => (state, vec![]),
            Err(e @ ReviewError::Table(_)) => {
                let commands = state.system.update(SystemMsg::ShowError(e.to_string()));
                (state, commands)
            }
        },

        ReviewMsg::RequestExport => {
            let suffix = state.config.config.review.export_suffix.clone();
            match state.review.export_cmd(&suffix) {
                Ok(cmd) => {
                    state.system.set_status("Exporting...");
                    (state, vec![cmd])
                }
                Err(e) => {
                    let commands = state
                        .system
                        .update(SystemMsg::ShowError(format!("Nothing to export: {e}")));
                    (state, commands)
                }
            }
        }

        ReviewMsg::Exported(path) => {
            let message = format!("Saved {}", path.display());
            state.review.last_export = Some(path);
            state.system.set_status(message.clone());
            (state, vec![Cmd::LogInfo { message }])
        }

        ReviewMsg::ExportFailed(error) => {
            let commands = state
                .system
                .update(SystemMsg::ShowError(format!("Export failed: {error}")));
            (state, commands)
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}
