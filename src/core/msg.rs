use serde::{Deserialize, Serialize};

pub mod review;
pub mod system;
pub mod ui;

use review::ReviewMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Review operations (delegated to ReviewState)
    Review(ReviewMsg),

    // UI operations (delegated to UiState)
    Ui(UiMsg),
}

impl From<SystemMsg> for Msg {
    fn from(msg: SystemMsg) -> Self {
        Msg::System(msg)
    }
}

impl From<ReviewMsg> for Msg {
    fn from(msg: ReviewMsg) -> Self {
        Msg::Review(msg)
    }
}

impl From<UiMsg> for Msg {
    fn from(msg: UiMsg) -> Self {
        Msg::Ui(msg)
    }
}
