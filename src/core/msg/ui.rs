use serde::{Deserialize, Serialize};

/// UI-specific messages for UiState transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiMsg {
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    /// Largest scroll offset that still shows text, measured when drawing
    SetScrollLimit(u16),
}
