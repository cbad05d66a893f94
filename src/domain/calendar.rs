//! Month calendar with entry markers

use crate::error::{MoodjourError, Result};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// First day of a calendar week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    /// Days between the start of the week and `date`
    fn offset(&self, date: NaiveDate) -> u32 {
        match self {
            WeekStart::Monday => date.weekday().num_days_from_monday(),
            WeekStart::Sunday => date.weekday().num_days_from_sunday(),
        }
    }

    /// Two-letter weekday headers in display order
    pub fn weekday_labels(&self) -> [&'static str; 7] {
        match self {
            WeekStart::Monday => ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
            WeekStart::Sunday => ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
        }
    }
}

impl FromStr for WeekStart {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monday" => Ok(WeekStart::Monday),
            "sunday" => Ok(WeekStart::Sunday),
            _ => Err(format!(
                "Invalid week_start: '{}'. Valid values are: monday, sunday",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
    pub has_entry: bool,
}

/// Parse a `YYYY-MM` month reference
pub fn parse_month(input: &str) -> Result<(i32, u32)> {
    NaiveDate::parse_from_str(&format!("{}-01", input.trim()), "%Y-%m-%d")
        .map(|date| (date.year(), date.month()))
        .map_err(|_| MoodjourError::InvalidDate(input.to_string()))
}

/// Build the grid of whole weeks covering `year`-`month`.
///
/// Leading and trailing days from neighbouring months pad the first and
/// last rows, so the result length is always a multiple of seven.
pub fn month_grid(
    year: i32,
    month: u32,
    entry_days: &BTreeSet<NaiveDate>,
    today: NaiveDate,
    week_start: WeekStart,
) -> Result<Vec<CalendarDay>> {
    let invalid = || MoodjourError::InvalidDate(format!("{}-{:02}", year, month));

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next_month_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid)?;
    let last = next_month_first - Duration::days(1);

    let start = first - Duration::days(i64::from(week_start.offset(first)));
    let end = last + Duration::days(i64::from(6 - week_start.offset(last)));

    Ok(start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| CalendarDay {
            date,
            is_current_month: date.month() == month && date.year() == year,
            is_today: date == today,
            has_entry: entry_days.contains(&date),
        })
        .collect())
}
