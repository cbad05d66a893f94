//! Analytics use case: fetch a snapshot from the store and derive statistics

use crate::domain::{
    compute_analytics, compute_streak_info, AnalyticsData, JournalEntryRecord, MoodRecord,
    StreakInfo, TagRecord,
};
use crate::error::{MoodjourError, Result};
use crate::infrastructure::JournalStore;
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// Optional inclusive date bounds for the distributions.
///
/// While a bound is set, entries whose date does not parse are left out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyticsScope {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl AnalyticsScope {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Self> {
        if let (Some(start), Some(end)) = (from, to) {
            if start > end {
                return Err(MoodjourError::Config(format!(
                    "Invalid range: {} is after {}",
                    start, end
                )));
            }
        }
        Ok(AnalyticsScope { from, to })
    }

    pub fn is_bounded(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    fn contains(&self, entry: &JournalEntryRecord) -> bool {
        if !self.is_bounded() {
            return true;
        }
        entry.parsed_date().is_some_and(|date| {
            self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
        })
    }
}

/// Streak and distributions computed from the same snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    /// Reference day the streak was measured against
    pub generated_on: NaiveDate,
    pub streak: StreakInfo,
    pub analytics: AnalyticsData,
}

/// Entry point for analytics over a journal store.
///
/// Every call re-reads the store; nothing is cached between calls.
pub struct AnalyticsService<S: JournalStore> {
    store: S,
    today: NaiveDate,
    scope: AnalyticsScope,
}

impl<S: JournalStore> AnalyticsService<S> {
    pub fn new(store: S) -> Self {
        AnalyticsService {
            store,
            today: Local::now().date_naive(),
            scope: AnalyticsScope::default(),
        }
    }

    /// Measure streaks against `today` instead of the local date
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Restrict distributions to a date range. Streaks always use the full history.
    pub fn with_scope(mut self, scope: AnalyticsScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn get_streak_info(&self) -> Result<StreakInfo> {
        let entries = self.store.list_all_entries()?;
        tracing::info!(entries = entries.len(), today = %self.today, "Computing streak info");
        Ok(compute_streak_info(&entries, self.today))
    }

    pub fn get_analytics_data(&self) -> Result<AnalyticsData> {
        let entries = self.store.list_all_entries()?;
        let moods = self.store.list_all_moods()?;
        let tags = self.store.list_all_tags()?;
        Ok(self.analyze(&entries, &moods, &tags))
    }

    /// Streak info and distributions over one snapshot
    pub fn get_report(&self) -> Result<AnalyticsReport> {
        let entries = self.store.list_all_entries()?;
        let moods = self.store.list_all_moods()?;
        let tags = self.store.list_all_tags()?;

        Ok(AnalyticsReport {
            generated_on: self.today,
            streak: compute_streak_info(&entries, self.today),
            analytics: self.analyze(&entries, &moods, &tags),
        })
    }

    fn analyze(
        &self,
        entries: &[JournalEntryRecord],
        moods: &[MoodRecord],
        tags: &[TagRecord],
    ) -> AnalyticsData {
        tracing::info!(
            entries = entries.len(),
            moods = moods.len(),
            tags = tags.len(),
            "Computing analytics"
        );

        if !self.scope.is_bounded() {
            return compute_analytics(entries, moods, tags);
        }

        let scoped: Vec<JournalEntryRecord> = entries
            .iter()
            .filter(|entry| self.scope.contains(entry))
            .cloned()
            .collect();
        tracing::debug!(kept = scoped.len(), "Applied date scope");
        compute_analytics(&scoped, moods, tags)
    }
}
