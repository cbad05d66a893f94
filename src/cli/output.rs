//! Output formatting utilities

use crate::application::AnalyticsReport;
use crate::domain::analytics::{GeneralStats, MoodDistribution, TagDistribution, WordCountTrends};
use crate::domain::{CalendarDay, StreakInfo, WeekStart};
use chrono::NaiveDate;
use std::fmt::Write;

const NO_ENTRIES: &str = "No entries found";

fn days(n: u32) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", n)
    }
}

fn optional_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Format streak info for display
pub fn format_streak_info(info: &StreakInfo) -> String {
    if info.total_entries == 0 {
        return NO_ENTRIES.to_string();
    }

    let mut output = String::new();
    let _ = writeln!(output, "Current streak:   {}", days(info.current_streak));
    let _ = writeln!(output, "Longest streak:   {}", days(info.longest_streak));
    let _ = writeln!(output, "Total entries:    {}", info.total_entries);
    let _ = writeln!(output, "Missed days:      {}", info.missed_days);
    let _ = writeln!(output, "Completion rate:  {:.1}%", info.completion_rate);
    let _ = writeln!(output, "First entry:      {}", optional_date(info.first_entry_date));
    let _ = writeln!(output, "Last entry:       {}", optional_date(info.last_entry_date));
    output
}

fn format_general(stats: &GeneralStats, output: &mut String) {
    let _ = writeln!(output, "Activity");
    let _ = writeln!(output, "  Entries:           {}", stats.total_entries);
    let _ = writeln!(output, "  Days active:       {}", stats.days_active);
    let _ = writeln!(
        output,
        "  Entries per week:  {:.1}",
        stats.average_entries_per_week
    );
    let _ = writeln!(
        output,
        "  Range:             {} to {}",
        optional_date(stats.first_entry_date),
        optional_date(stats.last_entry_date)
    );
}

fn format_moods(moods: &MoodDistribution, output: &mut String) {
    let _ = writeln!(output, "Moods");
    let _ = writeln!(output, "  Most frequent:     {}", moods.most_frequent_mood);
    let _ = writeln!(output, "  Mood selections:   {}", moods.total_mood_entries);
    for mood in &moods.mood_counts {
        let _ = writeln!(
            output,
            "  {:<14} {:<9} {:>4}  {:>5.1}%",
            mood.mood_name, mood.category, mood.count, mood.percentage
        );
    }
    let categories: Vec<String> = moods
        .category_counts
        .iter()
        .map(|(category, count)| format!("{} {}", category, count))
        .collect();
    let _ = writeln!(output, "  Categories:        {}", categories.join(", "));
}

fn format_tags(tags: &TagDistribution, output: &mut String) {
    let _ = writeln!(output, "Tags");
    let _ = writeln!(output, "  Most used:         {}", tags.most_used_tag);
    let _ = writeln!(output, "  Tag usages:        {}", tags.total_tag_usage);
    for tag in &tags.tag_counts {
        let _ = writeln!(
            output,
            "  #{:<13} {:>4}  {:>5.1}%",
            tag.tag_name, tag.count, tag.percentage
        );
    }
}

fn format_words(words: &WordCountTrends, output: &mut String) {
    let _ = writeln!(output, "Words");
    let _ = writeln!(output, "  Total:             {}", words.total_words);
    let _ = writeln!(output, "  Average:           {}", words.average_word_count);
    let _ = writeln!(output, "  Shortest entry:    {}", words.shortest_entry);
    let _ = writeln!(output, "  Longest entry:     {}", words.longest_entry);
}

/// Format the full analytics report for display
pub fn format_report(report: &AnalyticsReport) -> String {
    let analytics = &report.analytics;
    if report.streak.total_entries == 0 && analytics.general_stats.total_entries == 0 {
        return NO_ENTRIES.to_string();
    }

    let mut output = String::new();
    let _ = writeln!(output, "Streak (as of {})", report.generated_on.format("%Y-%m-%d"));
    for line in format_streak_info(&report.streak).lines() {
        let _ = writeln!(output, "  {}", line);
    }
    output.push('\n');
    format_general(&analytics.general_stats, &mut output);
    output.push('\n');
    format_moods(&analytics.mood_stats, &mut output);
    output.push('\n');
    format_tags(&analytics.tag_stats, &mut output);
    output.push('\n');
    format_words(&analytics.word_trends, &mut output);
    output
}

/// Format a month grid. Journaled days carry `*`, today is bracketed.
pub fn format_calendar(grid: &[CalendarDay], week_start: WeekStart) -> String {
    let mut output = String::new();

    if let Some(first) = grid.iter().find(|d| d.is_current_month) {
        let _ = writeln!(output, "{}", first.date.format("%B %Y"));
    }

    let header: String = week_start
        .weekday_labels()
        .iter()
        .map(|label| format!(" {:>2}  ", label))
        .collect();
    let _ = writeln!(output, "{}", header.trim_end());

    for week in grid.chunks(7) {
        let row: String = week.iter().map(format_calendar_cell).collect();
        let _ = writeln!(output, "{}", row.trim_end());
    }

    let journaled = grid
        .iter()
        .filter(|d| d.is_current_month && d.has_entry)
        .count();
    let journaled = u32::try_from(journaled).unwrap_or(u32::MAX);
    let _ = writeln!(output, "\n{} journaled this month  (* entry, [ ] today)", days(journaled));
    output
}

fn format_calendar_cell(day: &CalendarDay) -> String {
    use chrono::Datelike;

    if !day.is_current_month {
        return "     ".to_string();
    }
    let marker = if day.has_entry { '*' } else { ' ' };
    if day.is_today {
        format!("[{:>2}]{}", day.date.day(), marker)
    } else {
        format!(" {:>2} {}", day.date.day(), marker)
    }
}
