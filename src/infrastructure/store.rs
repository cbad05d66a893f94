//! Read access to journal records

use crate::domain::{JournalEntryRecord, MoodRecord, TagRecord};
use crate::error::{MoodjourError, Result};
use crate::infrastructure::config::{Config, JOURNAL_DIR};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Read-only view of the records analytics are computed from.
///
/// Each call is one round trip to the backing store and returns a fresh
/// snapshot.
pub trait JournalStore {
    fn list_all_entries(&self) -> Result<Vec<JournalEntryRecord>>;

    fn list_all_moods(&self) -> Result<Vec<MoodRecord>>;

    fn list_all_tags(&self) -> Result<Vec<TagRecord>>;
}

/// Store backed by JSON files inside a journal directory
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    pub root: PathBuf,
    config: Config,
}

impl FileSystemStore {
    /// Open the journal at `root`, reading its configuration
    pub fn open(root: PathBuf) -> Result<Self> {
        let config = Config::load_from_dir(&root)?;
        Ok(FileSystemStore { root, config })
    }

    /// Discover journal root by walking up from current directory.
    /// MOODJOUR_ROOT takes precedence over discovery.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MOODJOUR_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_journal_dir(&path) {
                return Self::open(path);
            }
            return Err(MoodjourError::Config(format!(
                "MOODJOUR_ROOT is set to '{}' but no {} directory found. \
                Run 'moodjour init' in that directory or unset MOODJOUR_ROOT.",
                path.display(),
                JOURNAL_DIR
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_journal_dir(&current) {
                return Self::open(current);
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(MoodjourError::NotJournalDirectory(start.to_path_buf())),
            }
        }
    }

    /// Create a journal at `root`: config, empty entry and tag files, and the
    /// default mood catalog. Existing data files are left untouched.
    pub fn initialize(root: PathBuf) -> Result<Self> {
        if Self::has_journal_dir(&root) {
            return Err(MoodjourError::Config(format!(
                "Directory already initialized: {}",
                root.display()
            )));
        }

        let config = Config::new();
        config.save_to_dir(&root)?;

        let store = FileSystemStore { root, config };
        store.write_if_missing(&store.config.entries, &Vec::<JournalEntryRecord>::new())?;
        store.write_if_missing(&store.config.tags, &Vec::<TagRecord>::new())?;
        store.write_if_missing(&store.config.moods, &MoodRecord::default_catalog())?;

        Ok(store)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn save_config(&mut self, config: Config) -> Result<()> {
        config.save_to_dir(&self.root)?;
        self.config = config;
        Ok(())
    }

    fn has_journal_dir(path: &Path) -> bool {
        path.join(JOURNAL_DIR).is_dir()
    }

    fn write_if_missing<T: Serialize>(&self, file: &str, records: &T) -> Result<()> {
        let path = self.root.join(file);
        if path.exists() {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string_pretty(records)?)?;
        Ok(())
    }

    /// Read a JSON array of records. None when the file does not exist.
    ///
    /// Only a file that is not a JSON array fails; elements that do not
    /// form a record are logged and skipped.
    fn read_records<T: DeserializeOwned>(&self, file: &str) -> Result<Option<Vec<T>>> {
        let path = self.root.join(file);

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Store file missing");
                return Ok(None);
            }
            Err(e) => return Err(MoodjourError::Io(e)),
        };

        let values: Vec<serde_json::Value> = serde_json::from_str(&contents)
            .map_err(|source| MoodjourError::Store { path: path.clone(), source })?;

        let mut records = Vec::with_capacity(values.len());
        for (index, value) in values.into_iter().enumerate() {
            match serde_json::from_value::<T>(value) {
                Ok(record) => records.push(record),
                Err(e) => tracing::warn!(
                    path = %path.display(),
                    index,
                    error = %e,
                    "Skipping malformed record"
                ),
            }
        }
        tracing::debug!(path = %path.display(), count = records.len(), "Loaded store file");
        Ok(Some(records))
    }
}

impl JournalStore for FileSystemStore {
    fn list_all_entries(&self) -> Result<Vec<JournalEntryRecord>> {
        Ok(self.read_records(&self.config.entries)?.unwrap_or_default())
    }

    fn list_all_moods(&self) -> Result<Vec<MoodRecord>> {
        Ok(self
            .read_records(&self.config.moods)?
            .unwrap_or_else(MoodRecord::default_catalog))
    }

    fn list_all_tags(&self) -> Result<Vec<TagRecord>> {
        Ok(self.read_records(&self.config.tags)?.unwrap_or_default())
    }
}

/// Store holding records in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    entries: Vec<JournalEntryRecord>,
    moods: Vec<MoodRecord>,
    tags: Vec<TagRecord>,
}

impl InMemoryStore {
    pub fn new(
        entries: Vec<JournalEntryRecord>,
        moods: Vec<MoodRecord>,
        tags: Vec<TagRecord>,
    ) -> Self {
        InMemoryStore {
            entries,
            moods,
            tags,
        }
    }
}

impl JournalStore for InMemoryStore {
    fn list_all_entries(&self) -> Result<Vec<JournalEntryRecord>> {
        Ok(self.entries.clone())
    }

    fn list_all_moods(&self) -> Result<Vec<MoodRecord>> {
        Ok(self.moods.clone())
    }

    fn list_all_tags(&self) -> Result<Vec<TagRecord>> {
        Ok(self.tags.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    #[test]
    fn test_initialize_writes_files() {
        let temp = TempDir::new().unwrap();
        let store = FileSystemStore::initialize(temp.path().to_path_buf()).unwrap();

        assert!(temp.path().join(".moodjour/config.toml").exists());
        assert_eq!(fs::read_to_string(temp.path().join("entries.json")).unwrap(), "[]");
        assert!(store.list_all_entries().unwrap().is_empty());
        assert!(store.list_all_tags().unwrap().is_empty());
        assert_eq!(store.list_all_moods().unwrap(), MoodRecord::default_catalog());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        FileSystemStore::initialize(temp.path().to_path_buf()).unwrap();

        assert!(FileSystemStore::initialize(temp.path().to_path_buf()).is_err());
    }

    #[test]
    fn test_initialize_keeps_existing_entries() {
        let temp = TempDir::new().unwrap();
        let existing = r#"[{"date": "2024-01-01", "content": "kept"}]"#;
        fs::write(temp.path().join("entries.json"), existing).unwrap();

        let store = FileSystemStore::initialize(temp.path().to_path_buf()).unwrap();

        let entries = store.list_all_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].content, "kept");
    }

    #[test]
    fn test_missing_files_fall_back() {
        let temp = TempDir::new().unwrap();
        Config::new().save_to_dir(temp.path()).unwrap();

        let store = FileSystemStore::open(temp.path().to_path_buf()).unwrap();

        assert!(store.list_all_entries().unwrap().is_empty());
        assert!(store.list_all_tags().unwrap().is_empty());
        assert_eq!(store.list_all_moods().unwrap().len(), 15);
    }

    #[test]
    fn test_reads_records_with_loose_id_lists() {
        let temp = TempDir::new().unwrap();
        let store = FileSystemStore::initialize(temp.path().to_path_buf()).unwrap();
        fs::write(
            temp.path().join("entries.json"),
            r#"[
                {"date": "2024-01-01", "content": "a", "primary_mood_id": 1, "secondary_mood_ids": "2,3", "tag_ids": "1"},
                {"date": "2024-01-02", "content": "b", "tag_ids": [1, 2]}
            ]"#,
        )
        .unwrap();
        fs::write(
            temp.path().join("tags.json"),
            r##"[{"id": 1, "name": "work", "color": "#123456"}]"##,
        )
        .unwrap();

        let entries = store.list_all_entries().unwrap();
        assert_eq!(entries[0].secondary_mood_ids.ids(), &[2, 3]);
        assert_eq!(entries[1].tag_ids.ids(), &[1, 2]);
        assert_eq!(store.list_all_tags().unwrap()[0].color, "#123456");
    }

    #[test]
    fn test_malformed_file_is_store_error() {
        let temp = TempDir::new().unwrap();
        let store = FileSystemStore::initialize(temp.path().to_path_buf()).unwrap();
        fs::write(temp.path().join("entries.json"), "{ not json").unwrap();

        match store.list_all_entries().unwrap_err() {
            MoodjourError::Store { path, .. } => assert!(path.ends_with("entries.json")),
            other => panic!("Expected Store error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_records_do_not_sink_the_file() {
        let temp = TempDir::new().unwrap();
        let store = FileSystemStore::initialize(temp.path().to_path_buf()).unwrap();
        fs::write(
            temp.path().join("entries.json"),
            r#"[
                {"date": "2024-01-01", "content": "good", "tag_ids": [1]},
                {"date": 20240102, "content": "numeric date"},
                {"date": "2024-01-03", "tag_ids": [1, "x", -1]},
                "not a record",
                {"content": "no date"}
            ]"#,
        )
        .unwrap();
        fs::write(
            temp.path().join("tags.json"),
            r#"[{"id": 1, "name": "work"}, {"id": "one", "name": "broken"}]"#,
        )
        .unwrap();

        let entries = store.list_all_entries().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].parsed_date(), None);
        assert_eq!(entries[2].tag_ids.ids(), &[1]);

        let tags = store.list_all_tags().unwrap();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "work");
    }

    #[test]
    fn test_custom_file_names() {
        let temp = TempDir::new().unwrap();
        let mut store = FileSystemStore::initialize(temp.path().to_path_buf()).unwrap();
        let mut config = store.config().clone();
        config.entries = "data/journal.json".to_string();
        store.save_config(config).unwrap();
        fs::create_dir_all(temp.path().join("data")).unwrap();
        fs::write(
            temp.path().join("data/journal.json"),
            r#"[{"date": "2024-01-01"}]"#,
        )
        .unwrap();

        let reopened = FileSystemStore::open(temp.path().to_path_buf()).unwrap();
        assert_eq!(reopened.list_all_entries().unwrap().len(), 1);
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        FileSystemStore::initialize(temp.path().to_path_buf()).unwrap();
        let subdir = temp.path().join("sub").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        let store = FileSystemStore::discover_from(&subdir).unwrap();
        assert_eq!(store.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_no_journal() {
        let temp = TempDir::new().unwrap();

        match FileSystemStore::discover_from(temp.path()).unwrap_err() {
            MoodjourError::NotJournalDirectory(_) => {}
            other => panic!("Expected NotJournalDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_discover_uses_env_root() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("MOODJOUR_ROOT");

        let temp = TempDir::new().unwrap();
        FileSystemStore::initialize(temp.path().to_path_buf()).unwrap();
        std::env::set_var("MOODJOUR_ROOT", temp.path());

        let store = FileSystemStore::discover().unwrap();
        assert_eq!(store.root, temp.path());
    }

    #[test]
    fn test_discover_env_root_without_journal_fails() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("MOODJOUR_ROOT");

        let temp = TempDir::new().unwrap();
        std::env::set_var("MOODJOUR_ROOT", temp.path());

        match FileSystemStore::discover().unwrap_err() {
            MoodjourError::Config(msg) => assert!(msg.contains("MOODJOUR_ROOT")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_in_memory_store_returns_snapshot() {
        let store = InMemoryStore::new(
            vec![JournalEntryRecord::new("2024-01-01", "hi")],
            MoodRecord::default_catalog(),
            vec![TagRecord::new(1, "work")],
        );

        assert_eq!(store.list_all_entries().unwrap().len(), 1);
        assert_eq!(store.list_all_moods().unwrap().len(), 15);
        assert_eq!(store.list_all_tags().unwrap()[0].name, "work");
    }
}
