//! Error types for moodjour

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for moodjour
#[derive(Debug, Error)]
pub enum MoodjourError {
    #[error("Not a moodjour directory: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Malformed store file {}: {source}", path.display())]
    Store {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MoodjourError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodjourError::NotJournalDirectory(_) => 2,
            MoodjourError::InvalidDate(_) => 3,
            MoodjourError::Store { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodjourError::NotJournalDirectory(path) => {
                format!(
                    "Not a moodjour directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodjour init' in this directory to create a new journal\n\
                    • Navigate to an existing moodjour directory\n\
                    • Set MOODJOUR_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MoodjourError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday\n\
                    • DD-MM-YYYY (e.g., 17-01-2025)\n\
                    • YYYY-MM-DD (e.g., 2025-01-17)\n\
                    • Months for 'calendar --month': YYYY-MM (e.g., 2025-01)\n\n\
                    Examples:\n\
                    moodjour streak --as-of yesterday\n\
                    moodjour stats --from 01-01-2025 --to 31-01-2025",
                    input
                )
            }
            MoodjourError::Store { path, source } => {
                format!(
                    "Could not read {}: {}\n\n\
                    Suggestions:\n\
                    • The file must contain a JSON array of records\n\
                    • Check the file paths with 'moodjour config --list'",
                    path.display(),
                    source
                )
            }
            MoodjourError::Config(msg) => {
                if msg.contains("week_start") {
                    format!(
                        "{}\n\n\
                        Valid values: monday, sunday\n\
                        Example: moodjour config week_start sunday",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodjourError
pub type Result<T> = std::result::Result<T, MoodjourError>;
