use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{
    core::cmd::Cmd,
    domain::{
        decision::ReviewAction,
        review::{ReviewSession, SessionPhase},
        table::{RecordTable, TableError, TITLE},
    },
    infrastructure::tabular::FileFormat,
};

#[derive(Debug, Error, PartialEq)]
pub enum ReviewError {
    #[error("no file loaded")]
    NotLoaded,
    #[error("no more rows to review")]
    Complete,
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Where and how an export is written; unset fields fall back to a
/// timestamped file next to the input in the input's format
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportOptions {
    pub target: Option<PathBuf>,
    pub format: Option<FileFormat>,
}

/// Review-related state
#[derive(Debug, Clone, Default)]
pub struct ReviewState {
    pub session: Option<ReviewSession>,
    pub source: Option<PathBuf>,
    pub format: Option<FileFormat>,
    pub is_loading: bool,
    pub load_error: Option<String>,
    pub export: ExportOptions,
    pub last_export: Option<PathBuf>,
}

impl ReviewState {
    pub fn new(export: ExportOptions) -> Self {
        Self {
            export,
            ..Default::default()
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.session
            .as_ref()
            .map_or(SessionPhase::Uninitialized, ReviewSession::phase)
    }

    /// Start loading `path`, dropping any previous error
    pub fn open(&mut self, path: PathBuf, required_columns: Vec<String>) -> Cmd {
        self.is_loading = true;
        self.load_error = None;
        Cmd::LoadTable {
            path,
            required_columns,
        }
    }

    /// Install a freshly read table as the current session
    pub fn loaded(
        &mut self,
        path: PathBuf,
        format: FileFormat,
        table: RecordTable,
        sort_column: &str,
    ) -> Result<(), ReviewError> {
        self.is_loading = false;
        match ReviewSession::new(table, sort_column) {
            Ok(session) => {
                self.session = Some(session);
                self.source = Some(path);
                self.format = Some(format);
                self.load_error = None;
                Ok(())
            }
            Err(e) => {
                self.load_failed(&path, &e.to_string());
                Err(e.into())
            }
        }
    }

    pub fn load_failed(&mut self, path: &Path, error: &str) {
        self.is_loading = false;
        self.session = None;
        self.load_error = Some(format!("Cannot open {}: {error}", path.display()));
    }

    /// Classify the current row. Returns the title of the row that was handled.
    pub fn classify(&mut self, action: ReviewAction) -> Result<String, ReviewError> {
        let session = self.session.as_mut().ok_or(ReviewError::NotLoaded)?;
        let title = match session.current() {
            Some(record) => record.value(TITLE).to_string(),
            None => return Err(ReviewError::Complete),
        };
        session.classify(&action.decision())?;
        Ok(title)
    }

    /// Build the export command for the current table
    pub fn export_cmd(&self, suffix: &str) -> Result<Cmd, ReviewError> {
        let (Some(session), Some(source)) = (self.session.as_ref(), self.source.as_ref()) else {
            return Err(ReviewError::NotLoaded);
        };
        let format = self
            .export
            .format
            .or(self.format)
            .unwrap_or(FileFormat::Xlsx);
        Ok(Cmd::ExportTable {
            table: session.table().clone(),
            source: source.clone(),
            target: self.export.target.clone(),
            format,
            suffix: suffix.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::table::{EXCLUSION, INCLUSION, PUBLICATION_TITLE};

    fn table() -> RecordTable {
        RecordTable::new(
            vec![TITLE.to_string(), PUBLICATION_TITLE.to_string()],
            vec![
                vec!["Ethics at the top".to_string(), "B Journal".to_string()],
                vec!["Boards and values".to_string(), "A Journal".to_string()],
            ],
        )
    }

    fn loaded_state() -> ReviewState {
        let mut state = ReviewState::default();
        state
            .loaded(
                PathBuf::from("refs.csv"),
                FileFormat::Csv,
                table(),
                PUBLICATION_TITLE,
            )
            .unwrap();
        state
    }

    #[test]
    fn test_open_sets_loading() {
        let mut state = ReviewState {
            load_error: Some("old".to_string()),
            ..Default::default()
        };
        let cmd = state.open(PathBuf::from("refs.csv"), vec![TITLE.to_string()]);

        assert!(state.is_loading);
        assert!(state.load_error.is_none());
        assert_eq!(
            cmd,
            Cmd::LoadTable {
                path: PathBuf::from("refs.csv"),
                required_columns: vec![TITLE.to_string()],
            }
        );
    }

    #[test]
    fn test_loaded_sorts_and_starts_reviewing() {
        let state = loaded_state();

        assert_eq!(state.phase(), SessionPhase::Reviewing);
        assert!(!state.is_loading);
        let session = state.session.as_ref().unwrap();
        assert_eq!(session.current().unwrap().value(TITLE), "Boards and values");
        assert!(session.table().has_column(INCLUSION));
    }

    #[test]
    fn test_load_failed_stays_uninitialized() {
        let mut state = loaded_state();
        state.load_failed(&PathBuf::from("bad.csv"), "missing required columns: Title");

        assert_eq!(state.phase(), SessionPhase::Uninitialized);
        assert_eq!(
            state.load_error.as_deref(),
            Some("Cannot open bad.csv: missing required columns: Title")
        );
    }

    #[test]
    fn test_classify_until_complete() {
        let mut state = loaded_state();

        assert_eq!(
            state.classify(ReviewAction::ExcludeNotBoard),
            Ok("Boards and values".to_string())
        );
        assert_eq!(
            state.classify(ReviewAction::Include),
            Ok("Ethics at the top".to_string())
        );
        assert_eq!(state.phase(), SessionPhase::Complete);
        assert_eq!(
            state.classify(ReviewAction::Discuss),
            Err(ReviewError::Complete)
        );

        let table = state.session.as_ref().unwrap().table();
        let first = table.record(0).unwrap();
        assert_eq!(first.value(INCLUSION), "Exclude");
        assert_eq!(first.value(EXCLUSION), "Not Board");
    }

    #[test]
    fn test_classify_without_session() {
        let mut state = ReviewState::default();
        assert_eq!(
            state.classify(ReviewAction::Include),
            Err(ReviewError::NotLoaded)
        );
    }

    #[test]
    fn test_export_cmd_defaults_to_input_format() {
        let state = loaded_state();
        match state.export_cmd("litreview").unwrap() {
            Cmd::ExportTable {
                source,
                target,
                format,
                suffix,
                ..
            } => {
                assert_eq!(source, PathBuf::from("refs.csv"));
                assert_eq!(target, None);
                assert_eq!(format, FileFormat::Csv);
                assert_eq!(suffix, "litreview");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_export_cmd_honours_overrides() {
        let mut state = loaded_state();
        state.export = ExportOptions {
            target: Some(PathBuf::from("out.xlsx")),
            format: Some(FileFormat::Xlsx),
        };
        match state.export_cmd("litreview").unwrap() {
            Cmd::ExportTable { target, format, .. } => {
                assert_eq!(target, Some(PathBuf::from("out.xlsx")));
                assert_eq!(format, FileFormat::Xlsx);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(
            ReviewState::default().export_cmd("litreview"),
            Err(ReviewError::NotLoaded)
        );
    }
}
