//! Word counting and word-count trends

use crate::domain::records::JournalEntryRecord;
use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Any `<...>` span is treated as markup
fn markup_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"<[^>]*>").unwrap())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCountByDate {
    pub date: NaiveDate,
    pub word_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WordCountTrends {
    /// Integer-truncated mean over all entries
    pub average_word_count: usize,
    pub total_words: usize,
    pub shortest_entry: usize,
    pub longest_entry: usize,
    /// Entries with a parseable date, oldest first
    pub daily_word_counts: Vec<WordCountByDate>,
}

/// Replace every markup span with whitespace. All other text, including
/// characters that look like Markdown, is left as written.
pub fn strip_markup(content: &str) -> String {
    markup_regex().replace_all(content, " ").into_owned()
}

pub fn count_words(content: &str) -> usize {
    strip_markup(content).split_whitespace().count()
}

pub fn word_count_trends(entries: &[JournalEntryRecord]) -> WordCountTrends {
    if entries.is_empty() {
        return WordCountTrends::default();
    }

    let counts: Vec<usize> = entries.iter().map(|e| count_words(&e.content)).collect();
    let total_words: usize = counts.iter().sum();

    let mut daily_word_counts: Vec<WordCountByDate> = entries
        .iter()
        .zip(&counts)
        .filter_map(|(entry, &word_count)| {
            entry
                .parsed_date()
                .map(|date| WordCountByDate { date, word_count })
        })
        .collect();
    daily_word_counts.sort_by_key(|day| day.date);

    WordCountTrends {
        average_word_count: total_words / counts.len(),
        total_words,
        shortest_entry: counts.iter().copied().min().unwrap_or(0),
        longest_entry: counts.iter().copied().max().unwrap_or(0),
        daily_word_counts,
    }
}
