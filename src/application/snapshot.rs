use crate::domain::analytics::{DrawdownPoint, EquityPoint, HeatmapDay};
use crate::domain::monitoring::{BotSummary, LogEntry, ModelStatus, OpenPosition};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Latest fetched and derived data for one bot.
///
/// `drawdown_curve` and `heatmap` are pure projections of the fetched feeds,
/// recomputed whole on every slow refresh. A failed refresh leaves the
/// previous data in place and records the error instead.
#[derive(Debug, Clone, Default)]
pub struct BotSnapshot {
    pub summary: Option<BotSummary>,
    pub equity_curve: Vec<EquityPoint>,
    pub drawdown_curve: Vec<DrawdownPoint>,
    pub intraday: Vec<EquityPoint>,
    pub heatmap: Vec<HeatmapDay>,
    pub positions: Vec<OpenPosition>,
    pub models: Vec<ModelStatus>,
    pub logs: Vec<LogEntry>,
    pub last_refresh: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
}

impl BotSnapshot {
    /// Deepest drawdown over the fetched curve (0 when flat or empty).
    pub fn max_drawdown(&self) -> f64 {
        self.drawdown_curve
            .iter()
            .map(|p| p.drawdown)
            .fold(0.0, f64::min)
    }

    /// (winning days, losing days) over the heatmap span.
    pub fn win_loss_days(&self) -> (usize, usize) {
        let wins = self
            .heatmap
            .iter()
            .filter(|d| d.pnl.is_some_and(|p| p > 0.0))
            .count();
        let losses = self
            .heatmap
            .iter()
            .filter(|d| d.pnl.is_some_and(|p| p < 0.0))
            .count();
        (wins, losses)
    }
}

/// Whole-fleet snapshot keyed by bot id. BTreeMap keeps UI iteration order
/// stable.
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    pub bots: BTreeMap<String, BotSnapshot>,
}

pub type SharedSnapshot = Arc<RwLock<DashboardSnapshot>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::{build_heatmap_days, compute_drawdown};

    #[test]
    fn test_max_drawdown_over_curve() {
        let points = vec![
            EquityPoint {
                equity: Some(10_000.0),
                ..Default::default()
            },
            EquityPoint {
                equity: Some(8_000.0),
                ..Default::default()
            },
            EquityPoint {
                equity: Some(9_000.0),
                ..Default::default()
            },
        ];
        let snapshot = BotSnapshot {
            drawdown_curve: compute_drawdown(&points, 10_000.0),
            ..Default::default()
        };
        assert_eq!(snapshot.max_drawdown(), -20.0);
    }

    #[test]
    fn test_win_loss_days_ignores_idle_days() {
        use crate::domain::analytics::DailyPnlEntry;

        let entries = vec![
            DailyPnlEntry {
                date: "2024-01-01".parse().unwrap(),
                daily_pnl: Some(50.0),
                trades: Some(2),
            },
            DailyPnlEntry {
                date: "2024-01-03".parse().unwrap(),
                daily_pnl: Some(-20.0),
                trades: Some(1),
            },
        ];
        let snapshot = BotSnapshot {
            heatmap: build_heatmap_days(&entries, "2024-01-05".parse().unwrap()),
            ..Default::default()
        };
        assert_eq!(snapshot.win_loss_days(), (1, 1));
    }
}
