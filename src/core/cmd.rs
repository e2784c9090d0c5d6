use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{domain::table::RecordTable, infrastructure::tabular::FileFormat};

/// Elm-like command definitions
/// Represents side effects (file I/O, terminal control, logging)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cmd {
    /// Read a table from disk and check its required columns
    LoadTable {
        path: PathBuf,
        required_columns: Vec<String>,
    },
    /// Write the annotated table. Without a `target` the file is placed next
    /// to `source` under a timestamped name.
    ExportTable {
        table: RecordTable,
        source: PathBuf,
        target: Option<PathBuf>,
        format: FileFormat,
        suffix: String,
    },

    // Terminal related
    Resize {
        width: u16,
        height: u16,
    },

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        let mut commands = commands;
        match commands.len() {
            0 => Cmd::None,
            1 => commands.pop().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }
}

/// Command execution result
#[derive(Debug, Clone)]
pub enum CmdResult {
    /// Success (may generate new messages)
    Success(Vec<crate::core::msg::Msg>),
    /// Error
    Error(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_batch_empty() {
        assert_eq!(Cmd::batch(vec![]), Cmd::None);
    }

    #[test]
    fn test_cmd_batch_single() {
        let original_cmd = Cmd::LogInfo {
            message: "hi".to_string(),
        };
        assert_eq!(Cmd::batch(vec![original_cmd.clone()]), original_cmd);
    }

    #[test]
    fn test_cmd_batch_multiple() {
        let cmds = vec![Cmd::None, Cmd::Resize { width: 1, height: 1 }];
        assert_eq!(Cmd::batch(cmds.clone()), Cmd::Batch(cmds));
    }

    #[test]
    fn test_cmd_serialization() {
        let cmd = Cmd::LoadTable {
            path: PathBuf::from("refs.xlsx"),
            required_columns: vec!["Title".to_string()],
        };
        let serialized = serde_json::to_string(&cmd).unwrap();
        let deserialized: Cmd = serde_json::from_str(&serialized).unwrap();
        assert_eq!(cmd, deserialized);
    }
}
