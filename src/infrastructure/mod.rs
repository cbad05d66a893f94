//! Infrastructure layer - Record store, configuration and logging

pub mod config;
pub mod logging;
pub mod store;

pub use config::Config;
pub use store::{FileSystemStore, InMemoryStore, JournalStore};
