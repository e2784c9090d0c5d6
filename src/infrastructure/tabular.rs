//! Tabular file I/O
//!
//! Reads CSV/TSV and spreadsheet files into a [`RecordTable`] and writes tables
//! back out. The format is chosen from the file extension.

pub mod delimited;
pub mod spreadsheet;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::Display;
use thiserror::Error;

use crate::domain::table::{RecordTable, TableError};

pub use delimited::DelimitedStore;
pub use spreadsheet::SpreadsheetStore;

#[derive(Debug, Error)]
pub enum TabularError {
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),
    #[error("{0} contains no worksheet")]
    NoWorksheet(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    SpreadsheetRead(#[from] calamine::Error),
    #[error(transparent)]
    SpreadsheetWrite(#[from] rust_xlsxwriter::XlsxError),
    #[error(transparent)]
    Table(#[from] TableError),
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, ValueEnum, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    Csv,
    Tsv,
    Xlsx,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Result<Self, TabularError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "csv" | "txt" => Ok(FileFormat::Csv),
            "tsv" | "tab" => Ok(FileFormat::Tsv),
            "xlsx" | "xlsm" | "xls" | "ods" => Ok(FileFormat::Xlsx),
            _ => Err(TabularError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            FileFormat::Csv => "csv",
            FileFormat::Tsv => "tsv",
            FileFormat::Xlsx => "xlsx",
        }
    }

    pub fn store(self) -> Box<dyn TabularStore> {
        match self {
            FileFormat::Csv => Box::new(DelimitedStore::new(b',')),
            FileFormat::Tsv => Box::new(DelimitedStore::new(b'\t')),
            FileFormat::Xlsx => Box::new(SpreadsheetStore),
        }
    }
}

/// Reads and writes whole tables
pub trait TabularStore {
    fn read(&self, path: &Path) -> Result<RecordTable, TabularError>;
    fn write(&self, table: &RecordTable, path: &Path) -> Result<(), TabularError>;
}

/// Read `path` and check that it carries every `required` column
pub fn load<S: AsRef<str>>(path: &Path, required: &[S]) -> Result<RecordTable, TabularError> {
    let format = FileFormat::from_path(path)?;
    let table = format.store().read(path)?;
    table.require_columns(required)?;
    tracing::info!(
        "Loaded {} rows, {} columns from {}",
        table.len(),
        table.headers().len(),
        path.display()
    );
    Ok(table)
}

pub fn save(table: &RecordTable, path: &Path, format: FileFormat) -> Result<(), TabularError> {
    format.store().write(table, path)?;
    tracing::info!("Wrote {} rows to {}", table.len(), path.display());
    Ok(())
}

/// Default export location next to the source:
/// `<dir>/<YYYYmmddHHMM>-<stem>-<suffix>.<ext>`
pub fn export_path(source: &Path, format: FileFormat, suffix: &str, now: DateTime<Local>) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("table");
    let timestamp = now.format("%Y%m%d%H%M");
    let name = if suffix.is_empty() {
        format!("{timestamp}-{stem}.{}", format.extension())
    } else {
        format!("{timestamp}-{stem}-{suffix}.{}", format.extension())
    };
    source
        .parent()
        .map_or_else(|| PathBuf::from(&name), |dir| dir.join(&name))
}
