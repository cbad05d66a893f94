//! Config management use case

use crate::domain::WeekStart;
use crate::error::{MoodjourError, Result};
use crate::infrastructure::{Config, FileSystemStore};
use std::str::FromStr;

/// Keys accepted by `get`
pub const CONFIG_KEYS: [&str; 5] = ["entries", "moods", "tags", "week_start", "created"];

/// Service for managing journal configuration
pub struct ConfigService {
    store: FileSystemStore,
}

impl ConfigService {
    pub fn new(store: FileSystemStore) -> Self {
        ConfigService { store }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.store.config();

        match key {
            "entries" => Ok(config.entries.clone()),
            "moods" => Ok(config.moods.clone()),
            "tags" => Ok(config.tags.clone()),
            "week_start" => Ok(format!("{:?}", config.week_start).to_lowercase()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MoodjourError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key,
                CONFIG_KEYS.join(", ")
            ))),
        }
    }

    /// Set a config value
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut config = self.store.config().clone();

        match key {
            "entries" | "moods" | "tags" => {
                let file = value.trim();
                if file.is_empty() {
                    return Err(MoodjourError::Config(format!(
                        "'{}' must name a file",
                        key
                    )));
                }
                match key {
                    "entries" => config.entries = file.to_string(),
                    "moods" => config.moods = file.to_string(),
                    _ => config.tags = file.to_string(),
                }
            }
            "week_start" => {
                config.week_start = WeekStart::from_str(value).map_err(MoodjourError::Config)?;
            }
            "created" => {
                return Err(MoodjourError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MoodjourError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: entries, moods, tags, week_start",
                    key
                )));
            }
        }

        self.store.save_config(config)
    }

    /// List all config values
    pub fn list(&self) -> &Config {
        self.store.config()
    }
}
