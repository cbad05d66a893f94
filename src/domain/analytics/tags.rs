//! Tag distribution

use super::{percentage, tally, NOT_AVAILABLE};
use crate::domain::records::{JournalEntryRecord, ReferenceIndex, TagRecord};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagCount {
    pub tag_name: String,
    pub color: String,
    pub count: u32,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagDistribution {
    pub tag_counts: Vec<TagCount>,
    pub most_used_tag: String,
    pub total_tag_usage: u32,
}

impl TagDistribution {
    pub fn empty() -> Self {
        TagDistribution {
            tag_counts: Vec::new(),
            most_used_tag: NOT_AVAILABLE.to_string(),
            total_tag_usage: 0,
        }
    }
}

pub fn tag_distribution(entries: &[JournalEntryRecord], tags: &[TagRecord]) -> TagDistribution {
    let index = ReferenceIndex::new(tags);
    let tallied = tally(
        entries
            .iter()
            .flat_map(|entry| entry.tag_ids.ids().iter().copied()),
        &index,
        "tag",
    );

    let total_tag_usage: u32 = tallied.iter().map(|(_, count)| count).sum();
    let tag_counts: Vec<TagCount> = tallied
        .into_iter()
        .map(|(tag, count)| TagCount {
            tag_name: tag.name.clone(),
            color: tag.color.clone(),
            count,
            percentage: percentage(count, total_tag_usage),
        })
        .collect();

    let most_used_tag = tag_counts
        .first()
        .map(|t| t.tag_name.clone())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    TagDistribution {
        tag_counts,
        most_used_tag,
        total_tag_usage,
    }
}
