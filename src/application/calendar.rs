//! Month calendar use case

use crate::domain::{month_grid, CalendarDay, WeekStart};
use crate::error::Result;
use crate::infrastructure::JournalStore;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Build the calendar grid for a month, marking days that have an entry.
pub fn month_calendar<S: JournalStore>(
    store: &S,
    year: i32,
    month: u32,
    today: NaiveDate,
    week_start: WeekStart,
) -> Result<Vec<CalendarDay>> {
    let entry_days: BTreeSet<NaiveDate> = store
        .list_all_entries()?
        .iter()
        .filter_map(|entry| entry.parsed_date())
        .collect();

    month_grid(year, month, &entry_days, today, week_start)
}
