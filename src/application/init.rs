//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::FileSystemStore;
use std::fs;
use std::path::Path;

/// Initialize a new journal at the specified path.
pub fn init(path: &Path) -> Result<FileSystemStore> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let store = FileSystemStore::initialize(path.to_path_buf())?;
    tracing::info!(root = %path.display(), "Initialized journal");

    println!("Initialized moodjour journal at {}", path.display());
    println!("Entries: {}", store.config().entries);

    Ok(store)
}
