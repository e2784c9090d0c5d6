//! Review traversal and classification
//!
//! The cursor is never stored independently of the table contents: after every
//! action it is recomputed by [`find_next_unhandled`] starting just past the row
//! that was handled.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    decision::Decision,
    table::{Record, RecordTable, TableError, EXCLUSION, INCLUSION},
};

/// Index of the first unhandled row at or after `from`, or `table.len()`
pub fn find_next_unhandled(table: &RecordTable, from: usize) -> usize {
    table
        .records()
        .enumerate()
        .skip(from)
        .find(|(_, record)| !record.is_handled())
        .map_or(table.len(), |(index, _)| index)
}

/// Write `decision` into row `index` and return the next cursor position.
///
/// The row is checked before anything is written, so an out-of-range index
/// leaves the table untouched.
pub fn apply(table: &mut RecordTable, index: usize, decision: &Decision) -> Result<usize, TableError> {
    let len = table.len();
    if index >= len {
        return Err(TableError::RowOutOfRange { index, len });
    }
    table.set(index, INCLUSION, decision.inclusion_label())?;
    table.set(index, EXCLUSION, decision.exclusion_reason())?;
    Ok(find_next_unhandled(table, index + 1))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub handled: usize,
    pub total: usize,
}

impl Progress {
    pub fn of(table: &RecordTable) -> Self {
        Self {
            handled: table.records().filter(Record::is_handled).count(),
            total: table.len(),
        }
    }

    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.handled as f64 / self.total as f64
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} rows handled", self.handled, self.total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    #[default]
    Uninitialized,
    Reviewing,
    Complete,
}

/// A loaded, sorted table together with its cursor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSession {
    table: RecordTable,
    cursor: usize,
}

impl ReviewSession {
    /// Prepare `table` for review: add the decision columns, sort by
    /// `sort_column` and place the cursor on the first unhandled row.
    pub fn new(mut table: RecordTable, sort_column: &str) -> Result<Self, TableError> {
        table.sort_by_column(sort_column)?;
        table.ensure_column(INCLUSION);
        table.ensure_column(EXCLUSION);
        let cursor = find_next_unhandled(&table, 0);
        Ok(Self { table, cursor })
    }

    pub fn table(&self) -> &RecordTable {
        &self.table
    }

    pub fn into_table(self) -> RecordTable {
        self.table
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<Record<'_>> {
        self.table.record(self.cursor)
    }

    pub fn phase(&self) -> SessionPhase {
        if self.cursor >= self.table.len() {
            SessionPhase::Complete
        } else {
            SessionPhase::Reviewing
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase() == SessionPhase::Complete
    }

    pub fn progress(&self) -> Progress {
        Progress::of(&self.table)
    }

    /// Apply `decision` to the current row and advance
    pub fn classify(&mut self, decision: &Decision) -> Result<usize, TableError> {
        self.cursor = apply(&mut self.table, self.cursor, decision)?;
        Ok(self.cursor)
    }
}
