use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};

use crate::{
    domain::review::{Progress, ReviewSession},
    infrastructure::{config::ReviewConfig, tabular},
};

/// Load `path` the same way the review does and report how far it got,
/// without starting the terminal UI
pub fn progress_report(path: &Path, review: &ReviewConfig) -> Result<Progress> {
    let table = tabular::load(path, &review.required_columns)
        .wrap_err_with(|| format!("Cannot open {}", path.display()))?;
    let session = ReviewSession::new(table, review.sort_column.column_name())?;
    Ok(session.progress())
}
