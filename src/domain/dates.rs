//! Date normalization helpers

use crate::error::{MoodjourError, Result};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};

/// Timestamp layouts accepted for entry dates besides plain `YYYY-MM-DD` and RFC 3339
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Normalize a stored entry date to a calendar day.
///
/// Returns None for anything that does not parse; callers exclude such
/// entries from date-based computations instead of failing. Time-of-day is
/// discarded.
pub fn parse_entry_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|timestamp| timestamp.date())
}

/// Round a percentage or ratio to one decimal place
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Inclusive number of calendar days from `start` through `end`.
/// Zero or negative when `end` is before `start`.
pub fn inclusive_span_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// A user-supplied reference to a day, resolved against "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateReference {
    Today,
    Yesterday,
    Specific(NaiveDate),
}

impl DateReference {
    /// Parse `today`, `yesterday`, `DD-MM-YYYY` or `YYYY-MM-DD`
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => Ok(DateReference::Today),
            "yesterday" => Ok(DateReference::Yesterday),
            _ => NaiveDate::parse_from_str(&normalized, "%d-%m-%Y")
                .or_else(|_| NaiveDate::parse_from_str(&normalized, "%Y-%m-%d"))
                .map(DateReference::Specific)
                .map_err(|_| MoodjourError::InvalidDate(input.to_string())),
        }
    }

    pub fn resolve(&self, base_date: NaiveDate) -> NaiveDate {
        match self {
            DateReference::Today => base_date,
            DateReference::Yesterday => base_date - Duration::days(1),
            DateReference::Specific(date) => *date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(parse_entry_date("2024-01-05"), Some(day(2024, 1, 5)));
        assert_eq!(parse_entry_date("  2024-01-05 "), Some(day(2024, 1, 5)));
    }

    #[test]
    fn test_parse_timestamps_drop_time() {
        assert_eq!(
            parse_entry_date("2024-01-05T23:59:59"),
            Some(day(2024, 1, 5))
        );
        assert_eq!(
            parse_entry_date("2024-01-05 08:15:00.123"),
            Some(day(2024, 1, 5))
        );
        assert_eq!(
            parse_entry_date("2024-01-05T08:15:00+02:00"),
            Some(day(2024, 1, 5))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_entry_date(""), None);
        assert_eq!(parse_entry_date("not a date"), None);
        assert_eq!(parse_entry_date("2024-02-30"), None);
        assert_eq!(parse_entry_date("05-01-2024"), None);
    }

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(75.0), 75.0);
        assert_eq!(round_one_decimal(100.0 / 3.0), 33.3);
        assert_eq!(round_one_decimal(200.0 / 3.0), 66.7);
    }

    #[test]
    fn test_inclusive_span() {
        assert_eq!(inclusive_span_days(day(2024, 1, 1), day(2024, 1, 1)), 1);
        assert_eq!(inclusive_span_days(day(2024, 1, 1), day(2024, 1, 5)), 5);
        assert_eq!(inclusive_span_days(day(2024, 1, 5), day(2024, 1, 1)), -3);
    }

    #[test]
    fn test_date_reference_parse() {
        assert_eq!(DateReference::parse("today").unwrap(), DateReference::Today);
        assert_eq!(DateReference::parse("Now").unwrap(), DateReference::Today);
        assert_eq!(
            DateReference::parse("yesterday").unwrap(),
            DateReference::Yesterday
        );
        assert_eq!(
            DateReference::parse("17-01-2025").unwrap(),
            DateReference::Specific(day(2025, 1, 17))
        );
        assert_eq!(
            DateReference::parse("2025-01-17").unwrap(),
            DateReference::Specific(day(2025, 1, 17))
        );
    }

    #[test]
    fn test_date_reference_invalid() {
        assert!(matches!(
            DateReference::parse("someday"),
            Err(MoodjourError::InvalidDate(_))
        ));
        assert!(DateReference::parse("32-01-2025").is_err());
    }

    #[test]
    fn test_date_reference_resolve() {
        let base = day(2025, 3, 1);
        assert_eq!(DateReference::Today.resolve(base), base);
        assert_eq!(DateReference::Yesterday.resolve(base), day(2025, 2, 28));
        assert_eq!(
            DateReference::Specific(day(2024, 12, 25)).resolve(base),
            day(2024, 12, 25)
        );
    }
}
