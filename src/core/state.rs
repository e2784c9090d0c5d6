use crate::{
    domain::{highlight::Highlighter, review::SessionPhase},
    infrastructure::config::Config,
};

pub mod review;
pub mod system;
pub mod ui;

pub use review::{ExportOptions, ReviewState};
pub use system::SystemState;
pub use ui::UiState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub review: ReviewState,
    pub ui: UiState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
    /// Keyword matcher built from `config.review.keywords`
    pub highlighter: Highlighter,
}

impl ConfigState {
    pub fn new(config: Config) -> Self {
        let highlighter = Highlighter::new(&config.review.keywords);
        Self {
            config,
            highlighter,
        }
    }
}

impl AppState {
    pub fn new(config: Config, export: ExportOptions) -> Self {
        Self {
            review: ReviewState::new(export),
            config: ConfigState::new(config),
            ..Default::default()
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.review.phase()
    }
}
