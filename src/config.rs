//! Runtime settings read from the environment (after `.env` is loaded).

use std::path::{Path, PathBuf};

/// Default location of the JSON log file.
pub const DEFAULT_LOG_FILE: &str = "logs/grade_analyzer.log";

/// Where the rolling JSON log is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub directory: PathBuf,
    pub file_name: String,
}

impl LogConfig {
    /// Reads `LOG_FILE_PATH`, falling back to [`DEFAULT_LOG_FILE`].
    pub fn from_env() -> Self {
        let path = std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        Self::from_path(&path)
    }

    /// Splits a log file path into the appender's directory and file name.
    pub fn from_path(path: &str) -> Self {
        let path = Path::new(path);
        let directory = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("logs"))
            .to_path_buf();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("grade_analyzer.log")
            .to_string();

        Self {
            directory,
            file_name,
        }
    }
}
