use chrono::{DateTime, Local};
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, CmdResult},
        msg::{review::ReviewMsg, Msg},
    },
    infrastructure::tabular::{self, FileFormat},
};

/// Command executor that performs the side effects requested by `update`
///
/// File I/O runs synchronously; its outcome is reported back as messages.
#[derive(Clone)]
pub struct CmdExecutor {
    resize_sender: Option<mpsc::UnboundedSender<(u16, u16)>>,
    clock: fn() -> DateTime<Local>,
}

impl Default for CmdExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CmdExecutor {
    pub fn new() -> Self {
        Self {
            resize_sender: None,
            clock: Local::now,
        }
    }

    /// Inject the channel the runner listens on for terminal resizes
    pub fn set_resize_sender(&mut self, sender: mpsc::UnboundedSender<(u16, u16)>) {
        self.resize_sender = Some(sender);
    }

    /// Replace the clock used for timestamped export names
    pub fn with_clock(mut self, clock: fn() -> DateTime<Local>) -> Self {
        self.clock = clock;
        self
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> CmdResult {
        match cmd {
            Cmd::None => CmdResult::Success(vec![]),

            Cmd::LoadTable {
                path,
                required_columns,
            } => {
                let msg = match FileFormat::from_path(path)
                    .and_then(|format| Ok((format, tabular::load(path, required_columns)?)))
                {
                    Ok((format, table)) => ReviewMsg::TableLoaded {
                        path: path.clone(),
                        format,
                        table,
                    },
                    Err(e) => {
                        log::error!("Failed to load {}: {e}", path.display());
                        ReviewMsg::LoadFailed {
                            path: path.clone(),
                            error: e.to_string(),
                        }
                    }
                };
                CmdResult::Success(vec![msg.into()])
            }

            Cmd::ExportTable {
                table,
                source,
                target,
                format,
                suffix,
            } => {
                let path = target.clone().unwrap_or_else(|| {
                    tabular::export_path(source, *format, suffix, (self.clock)())
                });
                let msg = match tabular::save(table, &path, *format) {
                    Ok(()) => ReviewMsg::Exported(path),
                    Err(e) => {
                        log::error!("Failed to export to {}: {e}", path.display());
                        ReviewMsg::ExportFailed(format!("{}: {e}", path.display()))
                    }
                };
                CmdResult::Success(vec![msg.into()])
            }

            Cmd::Resize { width, height } => {
                match &self.resize_sender {
                    Some(tx) => {
                        let _ = tx.send((*width, *height));
                    }
                    None => log::warn!(
                        "CmdExecutor: resize sender not configured; dropping Resize {width}x{height}"
                    ),
                }
                CmdResult::Success(vec![])
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
                CmdResult::Success(vec![])
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
                CmdResult::Success(vec![])
            }

            Cmd::Batch(commands) => {
                let mut messages = Vec::new();
                for cmd in commands {
                    match self.execute_command(cmd) {
                        CmdResult::Success(msgs) => messages.extend(msgs),
                        CmdResult::Error(e) => return CmdResult::Error(e),
                    }
                }
                CmdResult::Success(messages)
            }
        }
    }

    /// Execute multiple commands and collect the messages they produce
    pub fn execute_commands(&self, commands: &[Cmd]) -> Vec<Msg> {
        let mut messages = Vec::new();
        for cmd in commands {
            match self.execute_command(cmd) {
                CmdResult::Success(msgs) => {
                    log::debug!("Executed: {}", cmd.name());
                    messages.extend(msgs);
                }
                CmdResult::Error(e) => {
                    log::error!("Failed to execute {}: {e}", cmd.name());
                }
            }
        }
        messages
    }
}

/// Extension trait for Cmd to get human-readable names
trait CmdName {
    fn name(&self) -> &'static str;
}

impl CmdName for Cmd {
    fn name(&self) -> &'static str {
        match self {
            Cmd::None => "None",
            Cmd::LoadTable { .. } => "LoadTable",
            Cmd::ExportTable { .. } => "ExportTable",
            Cmd::Resize { .. } => "Resize",
            Cmd::LogError { .. } => "LogError",
            Cmd::LogInfo { .. } => "LogInfo",
            Cmd::Batch(_) => "Batch",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::TimeZone;
    use color_eyre::Result;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::table::{RecordTable, TITLE};

    fn fixed_clock() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 5, 9, 7, 0).unwrap()
    }

    fn messages(result: CmdResult) -> Vec<Msg> {
        match result {
            CmdResult::Success(msgs) => msgs,
            CmdResult::Error(e) => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn test_load_missing_file_reports_failure() {
        let executor = CmdExecutor::new();
        let msgs = messages(executor.execute_command(&Cmd::LoadTable {
            path: PathBuf::from("/definitely/not/here.csv"),
            required_columns: vec![TITLE.to_string()],
        }));
        assert!(matches!(
            msgs.as_slice(),
            [Msg::Review(ReviewMsg::LoadFailed { .. })]
        ));
    }

    #[test]
    fn test_load_unsupported_extension_reports_failure() {
        let executor = CmdExecutor::new();
        let msgs = messages(executor.execute_command(&Cmd::LoadTable {
            path: PathBuf::from("notes.pdf"),
            required_columns: vec![],
        }));
        match msgs.as_slice() {
            [Msg::Review(ReviewMsg::LoadFailed { error, .. })] => {
                assert!(error.contains("unsupported"), "{error}");
            }
            other => panic!("unexpected messages: {other:?}"),
        }
    }

    #[test]
    fn test_load_and_export_csv() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let source = dir.path().join("refs.csv");
        std::fs::write(&source, "Title,Publication Title\nA,J\n")?;

        let executor = CmdExecutor::new().with_clock(fixed_clock);
        let msgs = messages(executor.execute_command(&Cmd::LoadTable {
            path: source.clone(),
            required_columns: vec![TITLE.to_string()],
        }));
        let table = match msgs.as_slice() {
            [Msg::Review(ReviewMsg::TableLoaded { table, format, .. })] => {
                assert_eq!(*format, FileFormat::Csv);
                table.clone()
            }
            other => panic!("unexpected messages: {other:?}"),
        };

        let msgs = messages(executor.execute_command(&Cmd::ExportTable {
            table,
            source: source.clone(),
            target: None,
            format: FileFormat::Csv,
            suffix: "litreview".to_string(),
        }));
        let expected = dir.path().join("202403050907-refs-litreview.csv");
        assert_eq!(msgs, vec![Msg::Review(ReviewMsg::Exported(expected.clone()))]);
        assert!(expected.exists());
        Ok(())
    }

    #[test]
    fn test_export_failure_is_reported() {
        let executor = CmdExecutor::new();
        let msgs = messages(executor.execute_command(&Cmd::ExportTable {
            table: RecordTable::default(),
            source: PathBuf::from("refs.csv"),
            target: Some(PathBuf::from("/definitely/not/here/out.csv")),
            format: FileFormat::Csv,
            suffix: String::new(),
        }));
        assert!(matches!(
            msgs.as_slice(),
            [Msg::Review(ReviewMsg::ExportFailed(_))]
        ));
    }

    #[test]
    fn test_resize_is_forwarded() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut executor = CmdExecutor::new();
        executor.set_resize_sender(tx);

        let msgs = executor.execute_commands(&[Cmd::Batch(vec![
            Cmd::Resize {
                width: 100,
                height: 30,
            },
            Cmd::LogInfo {
                message: "resized".to_string(),
            },
        ])]);

        assert!(msgs.is_empty());
        assert_eq!(rx.try_recv().ok(), Some((100, 30)));
    }
}
