use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-trade-day P&L as delivered by the closed-trades endpoint. Sparse: only
/// days with at least one closed trade appear in the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPnlEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub daily_pnl: Option<f64>,
    #[serde(default)]
    pub trades: Option<u32>,
}

/// One calendar-day bucket of the gap-filled P&L calendar. `pnl` is `None`
/// on days without trading activity, which renders as a neutral cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapDay {
    pub date: NaiveDate,
    pub pnl: Option<f64>,
    pub trades: u32,
}

impl HeatmapDay {
    pub fn traded(&self) -> bool {
        self.pnl.is_some()
    }
}

/// Expands sparse per-trade-day P&L into a dense calendar spanning every day
/// from the earliest entry through `today`, inclusive and ascending.
///
/// The input may be unordered; the range start is the minimum entry date.
/// Duplicate dates resolve last-write-wins. Days are advanced with calendar
/// arithmetic, so a DST transition can neither skip nor duplicate a bucket.
/// If `today` precedes the earliest entry the result is empty.
pub fn build_heatmap_days(entries: &[DailyPnlEntry], today: NaiveDate) -> Vec<HeatmapDay> {
    if entries.is_empty() {
        return Vec::new();
    }

    let mut by_date: HashMap<NaiveDate, &DailyPnlEntry> = HashMap::with_capacity(entries.len());
    for entry in entries {
        by_date.insert(entry.date, entry);
    }

    let Some(start) = entries.iter().map(|entry| entry.date).min() else {
        return Vec::new();
    };

    let mut days = Vec::new();
    let mut day = start;
    while day <= today {
        match by_date.get(&day) {
            Some(entry) => days.push(HeatmapDay {
                date: day,
                pnl: Some(entry.daily_pnl.unwrap_or(0.0)),
                trades: entry.trades.unwrap_or(0),
            }),
            None => days.push(HeatmapDay {
                date: day,
                pnl: None,
                trades: 0,
            }),
        }

        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    days
}

/// [`build_heatmap_days`] against the machine-local current date, matching
/// what an operator looking at the calendar expects "today" to mean.
pub fn build_heatmap_days_local(entries: &[DailyPnlEntry]) -> Vec<HeatmapDay> {
    build_heatmap_days(entries, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, pnl: f64, trades: u32) -> DailyPnlEntry {
        DailyPnlEntry {
            date: date.parse().unwrap(),
            daily_pnl: Some(pnl),
            trades: Some(trades),
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(build_heatmap_days(&[], date("2024-01-03")).is_empty());
    }

    #[test]
    fn test_single_entry_spans_through_today() {
        let days = build_heatmap_days(&[entry("2024-01-01", 100.0, 1)], date("2024-01-03"));

        assert_eq!(days.len(), 3);
        assert_eq!(days[0].date, date("2024-01-01"));
        assert_eq!(days[0].pnl, Some(100.0));
        assert_eq!(days[0].trades, 1);
        assert_eq!(days[1].date, date("2024-01-02"));
        assert_eq!(days[1].pnl, None);
        assert_eq!(days[1].trades, 0);
        assert_eq!(days[2].date, date("2024-01-03"));
        assert_eq!(days[2].pnl, None);
        assert_eq!(days[2].trades, 0);
    }

    #[test]
    fn test_length_is_inclusive_day_count() {
        let entries = vec![entry("2024-02-10", 5.0, 1), entry("2024-02-20", -3.0, 2)];
        let today = date("2024-03-01");
        let days = build_heatmap_days(&entries, today);

        let expected = (today - date("2024-02-10")).num_days() + 1;
        assert_eq!(days.len() as i64, expected);
        // No gaps, strictly ascending.
        for pair in days.windows(2) {
            assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }
    }

    #[test]
    fn test_unordered_input_starts_at_minimum_date() {
        let entries = vec![entry("2024-01-05", 1.0, 1), entry("2024-01-02", 2.0, 1)];
        let days = build_heatmap_days(&entries, date("2024-01-05"));

        assert_eq!(days.first().map(|d| d.date), Some(date("2024-01-02")));
        assert_eq!(days.len(), 4);
    }

    #[test]
    fn test_duplicate_dates_resolve_last_write_wins() {
        let entries = vec![entry("2024-01-01", 10.0, 1), entry("2024-01-01", 25.0, 3)];
        let days = build_heatmap_days(&entries, date("2024-01-01"));

        assert_eq!(days.len(), 1);
        assert_eq!(days[0].pnl, Some(25.0));
        assert_eq!(days[0].trades, 3);
    }

    #[test]
    fn test_today_before_first_entry_yields_empty_output() {
        let days = build_heatmap_days(&[entry("2024-06-01", 1.0, 1)], date("2024-05-20"));
        assert!(days.is_empty());
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let entries = vec![DailyPnlEntry {
            date: date("2024-01-01"),
            daily_pnl: None,
            trades: None,
        }];
        let days = build_heatmap_days(&entries, date("2024-01-01"));

        // A present entry with absent fields still counts as a traded day.
        assert_eq!(days[0].pnl, Some(0.0));
        assert_eq!(days[0].trades, 0);
        assert!(days[0].traded());
    }

    #[test]
    fn test_rerun_is_deterministic() {
        let entries = vec![entry("2024-01-01", 7.0, 2), entry("2024-01-04", -4.0, 1)];
        let today = date("2024-01-10");
        assert_eq!(
            build_heatmap_days(&entries, today),
            build_heatmap_days(&entries, today)
        );
    }
}
