use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    domain::{decision::ReviewAction, table::RecordTable},
    infrastructure::tabular::FileFormat,
};

/// Messages driving the review session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReviewMsg {
    /// Load a file, replacing any current session
    Open(PathBuf),
    TableLoaded {
        path: PathBuf,
        format: FileFormat,
        table: RecordTable,
    },
    LoadFailed {
        path: PathBuf,
        error: String,
    },

    /// Classify the current record
    Apply(ReviewAction),

    RequestExport,
    Exported(PathBuf),
    ExportFailed(String),
}
