//! Mood, tag, word-count and activity distributions over a journal snapshot

mod general;
mod moods;
mod tags;
mod words;

pub use general::{general_stats, GeneralStats};
pub use moods::{mood_distribution, MoodCount, MoodDistribution};
pub use tags::{tag_distribution, TagCount, TagDistribution};
pub use words::{count_words, strip_markup, word_count_trends, WordCountByDate, WordCountTrends};

use crate::domain::dates::round_one_decimal;
use crate::domain::records::{Identified, JournalEntryRecord, MoodRecord, ReferenceIndex, TagRecord};
use serde::Serialize;
use std::collections::HashMap;

/// Label used when a distribution has nothing to rank
pub const NOT_AVAILABLE: &str = "N/A";

/// All distributions derived from one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsData {
    pub mood_stats: MoodDistribution,
    pub tag_stats: TagDistribution,
    pub word_trends: WordCountTrends,
    pub general_stats: GeneralStats,
}

impl AnalyticsData {
    /// Result for a journal without entries: zero counts and "N/A" labels
    pub fn empty() -> Self {
        AnalyticsData {
            mood_stats: MoodDistribution::empty(),
            tag_stats: TagDistribution::empty(),
            word_trends: WordCountTrends::default(),
            general_stats: GeneralStats::default(),
        }
    }
}

/// Derive every distribution for `entries`. Never fails: malformed dates
/// and dangling mood/tag ids only drop that record's contribution.
pub fn compute_analytics(
    entries: &[JournalEntryRecord],
    moods: &[MoodRecord],
    tags: &[TagRecord],
) -> AnalyticsData {
    if entries.is_empty() {
        return AnalyticsData::empty();
    }

    AnalyticsData {
        mood_stats: mood_distribution(entries, moods),
        tag_stats: tag_distribution(entries, tags),
        word_trends: word_count_trends(entries),
        general_stats: general_stats(entries),
    }
}

/// Count resolved references, most used first (ties by name, then id).
/// Ids missing from the index are dropped.
fn tally<'a, T: Identified>(
    ids: impl IntoIterator<Item = u32>,
    index: &ReferenceIndex<'a, T>,
    kind: &'static str,
) -> Vec<(&'a T, u32)> {
    let mut counts: HashMap<u32, (&'a T, u32)> = HashMap::new();

    for id in ids {
        match index.resolve(id) {
            Some(record) => counts.entry(id).or_insert((record, 0)).1 += 1,
            None => tracing::trace!(kind, id, "Dropping dangling reference"),
        }
    }

    let mut tallied: Vec<(&'a T, u32)> = counts.into_values().collect();
    tallied.sort_by(|(a, a_count), (b, b_count)| {
        b_count
            .cmp(a_count)
            .then_with(|| a.name().cmp(b.name()))
            .then_with(|| a.id().cmp(&b.id()))
    });
    tallied
}

fn percentage(count: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_one_decimal(f64::from(count) / f64::from(total) * 100.0)
}
