//! In-memory record table
//!
//! A table is an ordered header list plus ordered rows of string cells. Cells that
//! are missing in the source read as empty strings.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const TITLE: &str = "Title";
pub const PUBLICATION_TITLE: &str = "Publication Title";
pub const PUBLICATION_YEAR: &str = "Publication Year";
pub const ABSTRACT_NOTE: &str = "Abstract Note";
pub const INCLUSION: &str = "Inclusion";
pub const EXCLUSION: &str = "Exclusion";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("row {index} is out of range for a table of {len} rows")]
    RowOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Read-only view of a single row
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    headers: &'a [String],
    values: &'a [String],
}

impl<'a> Record<'a> {
    /// Cell value for `column`, or `None` if the table has no such column
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let values = self.values;
        self.headers
            .iter()
            .position(|h| h == column)
            .map(|i| values.get(i).map(String::as_str).unwrap_or(""))
    }

    /// Cell value for `column`, empty when the column is absent
    pub fn value(&self, column: &str) -> &'a str {
        self.get(column).unwrap_or("")
    }

    pub fn is_handled(&self) -> bool {
        !self.value(INCLUSION).trim().is_empty()
    }
}

impl RecordTable {
    /// Build a table, padding short rows. Rows longer than the header get
    /// `Unnamed: <position>` headers for the extra cells so nothing is dropped.
    pub fn new(mut headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = rows
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .max(headers.len());
        for position in headers.len()..width {
            let mut name = format!("Unnamed: {position}");
            while headers.contains(&name) {
                name.push('_');
            }
            headers.push(name);
        }
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.column_index(column).is_some()
    }

    pub fn record(&self, index: usize) -> Option<Record<'_>> {
        self.rows.get(index).map(|values| Record {
            headers: &self.headers,
            values,
        })
    }

    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows.iter().map(|values| Record {
            headers: &self.headers,
            values,
        })
    }

    /// Check that every column in `required` is present
    pub fn require_columns<S: AsRef<str>>(&self, required: &[S]) -> Result<(), TableError> {
        let missing: Vec<String> = required
            .iter()
            .map(AsRef::as_ref)
            .filter(|c| !self.has_column(c))
            .map(str::to_string)
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(TableError::MissingColumns(missing))
        }
    }

    /// Append an empty column if it does not exist yet and return its index
    pub fn ensure_column(&mut self, column: &str) -> usize {
        if let Some(index) = self.column_index(column) {
            return index;
        }
        self.headers.push(column.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.headers.len() - 1
    }

    /// Set a cell, appending the column when needed
    pub fn set(&mut self, index: usize, column: &str, value: impl Into<String>) -> Result<(), TableError> {
        let len = self.rows.len();
        if index >= len {
            return Err(TableError::RowOutOfRange { index, len });
        }
        let col = self.ensure_column(column);
        self.rows[index][col] = value.into();
        Ok(())
    }

    /// Stable ascending sort on `column`; rows with an empty key go last
    pub fn sort_by_column(&mut self, column: &str) -> Result<(), TableError> {
        let col = self
            .column_index(column)
            .ok_or_else(|| TableError::MissingColumns(vec![column.to_string()]))?;
        self.rows.sort_by(|a, b| {
            let (a, b) = (a[col].trim(), b[col].trim());
            match (a.is_empty(), b.is_empty()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => a.cmp(b),
            }
        });
        Ok(())
    }
}
