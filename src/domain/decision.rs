//! Reviewer decisions and the fixed set of decision actions

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// What gets written into the `Inclusion`/`Exclusion` columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Include,
    Discuss,
    Exclude { reason: String },
}

impl Decision {
    pub fn exclude(reason: impl Into<String>) -> Self {
        Decision::Exclude {
            reason: reason.into(),
        }
    }

    /// Value stored in the `Inclusion` column
    pub fn inclusion_label(&self) -> &'static str {
        match self {
            Decision::Include => "Yes",
            Decision::Discuss => "Discuss",
            Decision::Exclude { .. } => "Exclude",
        }
    }

    /// Value stored in the `Exclusion` column; empty unless excluded
    pub fn exclusion_reason(&self) -> &str {
        match self {
            Decision::Exclude { reason } => reason,
            Decision::Include | Decision::Discuss => "",
        }
    }

    /// Read a decision back from cell values. `Include` and `No` from older
    /// sheets are accepted too.
    pub fn from_cells(inclusion: &str, exclusion: &str) -> Option<Self> {
        match inclusion.trim().to_ascii_lowercase().as_str() {
            "include" | "yes" => Some(Decision::Include),
            "discuss" => Some(Decision::Discuss),
            "exclude" | "no" => Some(Decision::exclude(exclusion.trim())),
            _ => None,
        }
    }
}

/// The decision commands a reviewer can issue
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum ReviewAction {
    Include,
    ExcludeNotBoard,
    ExcludeNotEthics,
    ExcludeOther,
    Discuss,
}

impl ReviewAction {
    pub fn decision(self) -> Decision {
        match self {
            ReviewAction::Include => Decision::Include,
            ReviewAction::ExcludeNotBoard => Decision::exclude("Not Board"),
            ReviewAction::ExcludeNotEthics => Decision::exclude("Not Ethics"),
            ReviewAction::ExcludeOther => Decision::exclude("Other"),
            ReviewAction::Discuss => Decision::Discuss,
        }
    }

    /// Button caption
    pub fn label(self) -> &'static str {
        match self {
            ReviewAction::Include => "Include",
            ReviewAction::ExcludeNotBoard => "Exclude - Not Board",
            ReviewAction::ExcludeNotEthics => "Exclude - Not Ethics",
            ReviewAction::ExcludeOther => "Exclude - Other",
            ReviewAction::Discuss => "To Discuss",
        }
    }
}
