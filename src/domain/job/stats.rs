//! Aggregate statistics over a user's applications

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// How many distinct months of activity the monthly series covers
pub const MONTHLY_STATS_MONTHS: usize = 6;

/// Per-status counts, zero when a status has no records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub pending: u64,
    pub interview: u64,
    pub denied: u64,
}

/// Application count for one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    /// Human-readable label, e.g. "Aug 2026"
    pub date: String,
    pub count: u64,
}

impl MonthlyCount {
    /// Build a labelled count from a (year, month) group key
    pub fn from_year_month(year: i32, month: u32, count: u64) -> Self {
        let label = NaiveDate::from_ymd_opt(year, month, 1)
            .map(|d| d.format("%b %Y").to_string())
            .unwrap_or_else(|| format!("{month}/{year}"));

        Self { date: label, count }
    }
}

/// Stats for one user: status breakdown plus recent monthly activity
#[derive(Debug, Clone, Default)]
pub struct JobStats {
    pub status_counts: StatusCounts,
    /// The six most recent active months, ordered oldest to newest
    pub monthly_applications: Vec<MonthlyCount>,
}

/// Order (year, month) group keys newest-first, keep the most recent six,
/// then flip to oldest-first for charting.
pub fn monthly_series(mut groups: Vec<(i32, u32, u64)>) -> Vec<MonthlyCount> {
    groups.sort_by(|a, b| (b.0, b.1).cmp(&(a.0, a.1)));
    groups.truncate(MONTHLY_STATS_MONTHS);
    groups.reverse();

    groups
        .into_iter()
        .map(|(year, month, count)| MonthlyCount::from_year_month(year, month, count))
        .collect()
}

/// Extract the (year, month) group key from a timestamp
pub fn year_month(ts: chrono::DateTime<chrono::Utc>) -> (i32, u32) {
    (ts.year(), ts.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_label_format() {
        let entry = MonthlyCount::from_year_month(2026, 8, 3);
        assert_eq!(entry.date, "Aug 2026");
        assert_eq!(entry.count, 3);
    }

    #[test]
    fn test_monthly_series_keeps_recent_six_oldest_first() {
        let groups = vec![
            (2026, 1, 1),
            (2026, 2, 2),
            (2026, 3, 3),
            (2026, 4, 4),
            (2026, 5, 5),
            (2026, 6, 6),
            (2026, 7, 7),
            (2025, 12, 12),
        ];

        let series = monthly_series(groups);

        assert_eq!(series.len(), MONTHLY_STATS_MONTHS);
        assert_eq!(series[0].date, "Feb 2026");
        assert_eq!(series[5].date, "Jul 2026");
        assert_eq!(series[5].count, 7);
    }

    #[test]
    fn test_monthly_series_spanning_years() {
        let groups = vec![(2026, 1, 4), (2025, 11, 2), (2025, 12, 3)];

        let series = monthly_series(groups);

        assert_eq!(
            series.iter().map(|m| m.date.as_str()).collect::<Vec<_>>(),
            vec!["Nov 2025", "Dec 2025", "Jan 2026"]
        );
    }

    #[test]
    fn test_status_counts_default_to_zero() {
        let counts = StatusCounts::default();
        assert_eq!(counts.pending, 0);
        assert_eq!(counts.interview, 0);
        assert_eq!(counts.denied, 0);
    }
}
