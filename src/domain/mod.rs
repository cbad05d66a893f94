//! Domain layer - Journal records and the analytics engine

pub mod analytics;
pub mod calendar;
pub mod dates;
pub mod records;
pub mod streak;

pub use analytics::{compute_analytics, AnalyticsData};
pub use calendar::{month_grid, CalendarDay, WeekStart};
pub use dates::{parse_entry_date, DateReference};
pub use records::{IdList, JournalEntryRecord, MoodCategory, MoodRecord, TagRecord};
pub use streak::{compute_streak_info, StreakInfo};
