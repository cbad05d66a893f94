//! Configuration management

use crate::domain::WeekStart;
use crate::error::{MoodjourError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Directory marking a journal root
pub const JOURNAL_DIR: &str = ".moodjour";

fn default_entries_file() -> String {
    "entries.json".to_string()
}

fn default_moods_file() -> String {
    "moods.json".to_string()
}

fn default_tags_file() -> String {
    "tags.json".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Entries file, relative to the journal root
    #[serde(default = "default_entries_file")]
    pub entries: String,
    #[serde(default = "default_moods_file")]
    pub moods: String,
    #[serde(default = "default_tags_file")]
    pub tags: String,
    #[serde(default)]
    pub week_start: WeekStart,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            entries: default_entries_file(),
            moods: default_moods_file(),
            tags: default_tags_file(),
            week_start: WeekStart::default(),
            created: Utc::now(),
        }
    }

    /// Load config from .moodjour/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(JOURNAL_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodjourError::NotJournalDirectory(path.to_path_buf())
            } else {
                MoodjourError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MoodjourError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .moodjour/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let journal_dir = path.join(JOURNAL_DIR);
        let config_path = journal_dir.join("config.toml");

        if !journal_dir.exists() {
            fs::create_dir(&journal_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
