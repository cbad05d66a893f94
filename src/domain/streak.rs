//! Writing streak and consistency metrics

use crate::domain::dates::{inclusive_span_days, round_one_decimal};
use crate::domain::records::JournalEntryRecord;
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeSet;

/// Streak summary for a journal history
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StreakInfo {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_entries: u32,
    pub missed_days: u32,
    pub first_entry_date: Option<NaiveDate>,
    pub last_entry_date: Option<NaiveDate>,
    /// Percentage of days from the first entry through today with an entry
    pub completion_rate: f64,
}

/// Compute streak metrics for `entries` as seen on `today`.
///
/// Entries with unparseable dates are ignored. An empty (or fully
/// unparseable) history yields `StreakInfo::default()`.
pub fn compute_streak_info(entries: &[JournalEntryRecord], today: NaiveDate) -> StreakInfo {
    let mut total_entries: u32 = 0;
    let mut days = BTreeSet::new();

    for entry in entries {
        match entry.parsed_date() {
            Some(date) => {
                total_entries += 1;
                days.insert(date);
            }
            None => tracing::debug!(date = %entry.date, "Skipping entry with unparseable date"),
        }
    }

    let (Some(&first), Some(&last)) = (days.first(), days.last()) else {
        return StreakInfo::default();
    };

    let span = inclusive_span_days(first, today);
    let missed_days = (span - i64::from(total_entries)).max(0);
    let completion_rate = if span > 0 {
        round_one_decimal(f64::from(total_entries) / span as f64 * 100.0)
    } else {
        0.0
    };

    StreakInfo {
        current_streak: current_streak(&days, today),
        longest_streak: longest_streak(&days),
        total_entries,
        missed_days: u32::try_from(missed_days).unwrap_or(u32::MAX),
        first_entry_date: Some(first),
        last_entry_date: Some(last),
        completion_rate,
    }
}

/// Consecutive days ending today, or ending yesterday when today's entry
/// has not been written yet.
fn current_streak(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let yesterday = today - Duration::days(1);
    let mut cursor = if days.contains(&today) {
        today
    } else if days.contains(&yesterday) {
        yesterday
    } else {
        return 0;
    };

    let mut streak = 0;
    while days.contains(&cursor) {
        streak += 1;
        cursor -= Duration::days(1);
    }
    streak
}

/// Longest run of consecutive days in an ascending day set
fn longest_streak(days: &BTreeSet<NaiveDate>) -> u32 {
    let mut longest = 0;
    let mut running = 0;
    let mut previous: Option<NaiveDate> = None;

    for &day in days {
        running = match previous {
            Some(prev) if (day - prev).num_days() == 1 => running + 1,
            _ => 1,
        };
        longest = longest.max(running);
        previous = Some(day);
    }

    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entries(dates: &[&str]) -> Vec<JournalEntryRecord> {
        dates
            .iter()
            .map(|d| JournalEntryRecord::new(*d, "text"))
            .collect()
    }

    #[test]
    fn test_consecutive_week_through_today() {
        let info = compute_streak_info(
            &entries(&[
                "2024-01-03",
                "2024-01-01",
                "2024-01-05",
                "2024-01-02",
                "2024-01-04",
            ]),
            day(2024, 1, 5),
        );
        assert_eq!(info.current_streak, 5);
        assert_eq!(info.longest_streak, 5);
        assert_eq!(info.total_entries, 5);
        assert_eq!(info.missed_days, 0);
        assert_eq!(info.completion_rate, 100.0);
        assert_eq!(info.first_entry_date, Some(day(2024, 1, 1)));
        assert_eq!(info.last_entry_date, Some(day(2024, 1, 5)));
    }

    #[test]
    fn test_gap_breaks_streak() {
        let info = compute_streak_info(
            &entries(&["2024-01-01", "2024-01-03", "2024-01-04"]),
            day(2024, 1, 4),
        );
        assert_eq!(info.current_streak, 2);
        assert_eq!(info.longest_streak, 2);
        assert_eq!(info.missed_days, 1);
        assert_eq!(info.completion_rate, 75.0);
    }

    #[test]
    fn test_empty_history() {
        let info = compute_streak_info(&[], day(2024, 1, 4));
        assert_eq!(info, StreakInfo::default());
        assert_eq!(info.first_entry_date, None);
        assert_eq!(info.completion_rate, 0.0);
    }

    #[test]
    fn test_only_unparseable_dates() {
        let info = compute_streak_info(&entries(&["garbage", ""]), day(2024, 1, 4));
        assert_eq!(info, StreakInfo::default());
    }

    #[test]
    fn test_unparseable_dates_are_skipped() {
        let info = compute_streak_info(
            &entries(&["2024-01-03", "n/a", "2024-01-04"]),
            day(2024, 1, 4),
        );
        assert_eq!(info.total_entries, 2);
        assert_eq!(info.current_streak, 2);
    }

    #[test]
    fn test_yesterday_grace_day() {
        let info = compute_streak_info(
            &entries(&["2024-01-02", "2024-01-03"]),
            day(2024, 1, 4),
        );
        assert_eq!(info.current_streak, 2);
        assert_eq!(info.missed_days, 1);
    }

    #[test]
    fn test_streak_lapsed_after_two_days() {
        let info = compute_streak_info(
            &entries(&["2024-01-01", "2024-01-02"]),
            day(2024, 1, 4),
        );
        assert_eq!(info.current_streak, 0);
        assert_eq!(info.longest_streak, 2);
    }

    #[test]
    fn test_single_entry() {
        let today = day(2024, 6, 10);
        let single = |d: &str| compute_streak_info(&entries(&[d]), today);

        let on_today = single("2024-06-10");
        assert_eq!(on_today.longest_streak, 1);
        assert_eq!(on_today.current_streak, 1);
        assert_eq!(on_today.completion_rate, 100.0);

        assert_eq!(single("2024-06-09").current_streak, 1);

        let old = single("2024-06-01");
        assert_eq!(old.current_streak, 0);
        assert_eq!(old.longest_streak, 1);
        assert_eq!(old.missed_days, 9);
        assert_eq!(old.completion_rate, 10.0);
    }

    #[test]
    fn test_longest_streak_in_the_past() {
        let info = compute_streak_info(
            &entries(&[
                "2024-01-01",
                "2024-01-02",
                "2024-01-03",
                "2024-01-04",
                "2024-01-10",
                "2024-01-11",
            ]),
            day(2024, 1, 11),
        );
        assert_eq!(info.current_streak, 2);
        assert_eq!(info.longest_streak, 4);
        assert_eq!(info.missed_days, 5);
        assert_eq!(info.completion_rate, 54.5);
    }

    #[test]
    fn test_timestamps_count_by_day() {
        let info = compute_streak_info(
            &entries(&["2024-01-03T22:10:00", "2024-01-04 06:00:00"]),
            day(2024, 1, 4),
        );
        assert_eq!(info.current_streak, 2);
        assert_eq!(info.longest_streak, 2);
    }

    #[test]
    fn test_future_history_never_negative() {
        let info = compute_streak_info(
            &entries(&["2024-02-01", "2024-02-02"]),
            day(2024, 1, 1),
        );
        assert_eq!(info.missed_days, 0);
        assert_eq!(info.completion_rate, 0.0);
        assert_eq!(info.current_streak, 0);
        assert_eq!(info.longest_streak, 2);
    }

    #[test]
    fn test_backfilled_history_floors_missed_days() {
        // Two records normalize to the same day
        let info = compute_streak_info(
            &entries(&["2024-01-01", "2024-01-01T12:00:00"]),
            day(2024, 1, 1),
        );
        assert_eq!(info.total_entries, 2);
        assert_eq!(info.missed_days, 0);
        assert_eq!(info.longest_streak, 1);
        assert!(info.current_streak <= info.total_entries);
    }

    #[test]
    fn test_deterministic() {
        let history = entries(&["2024-01-01", "2024-01-03", "2024-01-04"]);
        let today = day(2024, 1, 4);
        assert_eq!(
            compute_streak_info(&history, today),
            compute_streak_info(&history, today)
        );
    }
}
