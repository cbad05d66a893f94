//! General activity statistics

use crate::domain::dates::{inclusive_span_days, round_one_decimal};
use crate::domain::records::JournalEntryRecord;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GeneralStats {
    pub total_entries: u32,
    /// Distinct days with a parseable entry date
    pub days_active: u32,
    pub average_entries_per_week: f64,
    pub first_entry_date: Option<NaiveDate>,
    pub last_entry_date: Option<NaiveDate>,
}

pub fn general_stats(entries: &[JournalEntryRecord]) -> GeneralStats {
    if entries.is_empty() {
        return GeneralStats::default();
    }

    let total_entries = u32::try_from(entries.len()).unwrap_or(u32::MAX);
    let days: BTreeSet<NaiveDate> = entries.iter().filter_map(|e| e.parsed_date()).collect();
    let first_entry_date = days.first().copied();
    let last_entry_date = days.last().copied();

    let weeks = match (first_entry_date, last_entry_date) {
        (Some(first), Some(last)) => inclusive_span_days(first, last) as f64 / 7.0,
        _ => 0.0,
    };

    GeneralStats {
        total_entries,
        days_active: u32::try_from(days.len()).unwrap_or(u32::MAX),
        average_entries_per_week: round_one_decimal(f64::from(total_entries) / weeks.max(1.0)),
        first_entry_date,
        last_entry_date,
    }
}
