//! moodjour - Writing streaks and mood analytics for a journal
//!
//! Reads journal entries, moods and tags from a small JSON store and derives
//! writing streaks, mood and tag distributions, word-count trends and a
//! month calendar of journaled days.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodjourError;
