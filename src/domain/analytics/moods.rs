//! Mood distribution

use super::{percentage, tally, NOT_AVAILABLE};
use crate::domain::records::{JournalEntryRecord, MoodCategory, MoodRecord, ReferenceIndex};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodCount {
    pub mood_name: String,
    pub category: MoodCategory,
    pub count: u32,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodDistribution {
    /// Resolved moods, most frequent first
    pub mood_counts: Vec<MoodCount>,
    pub most_frequent_mood: String,
    pub total_mood_entries: u32,
    /// Always holds all three categories
    pub category_counts: BTreeMap<MoodCategory, u32>,
}

impl MoodDistribution {
    pub fn empty() -> Self {
        MoodDistribution {
            mood_counts: Vec::new(),
            most_frequent_mood: NOT_AVAILABLE.to_string(),
            total_mood_entries: 0,
            category_counts: seeded_categories(),
        }
    }
}

fn seeded_categories() -> BTreeMap<MoodCategory, u32> {
    MoodCategory::ALL.iter().map(|&c| (c, 0)).collect()
}

/// Count primary and secondary moods across all entries.
pub fn mood_distribution(entries: &[JournalEntryRecord], moods: &[MoodRecord]) -> MoodDistribution {
    let index = ReferenceIndex::new(moods);
    let tallied = tally(
        entries.iter().flat_map(|entry| entry.mood_ids()),
        &index,
        "mood",
    );

    let total_mood_entries: u32 = tallied.iter().map(|(_, count)| count).sum();
    let mut category_counts = seeded_categories();
    for (mood, count) in &tallied {
        *category_counts.entry(mood.category).or_insert(0) += count;
    }

    let mood_counts: Vec<MoodCount> = tallied
        .into_iter()
        .map(|(mood, count)| MoodCount {
            mood_name: mood.name.clone(),
            category: mood.category,
            count,
            percentage: percentage(count, total_mood_entries),
        })
        .collect();

    let most_frequent_mood = mood_counts
        .first()
        .map(|m| m.mood_name.clone())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    MoodDistribution {
        mood_counts,
        most_frequent_mood,
        total_mood_entries,
        category_counts,
    }
}
