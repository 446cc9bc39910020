//! End-to-end poller behavior against a scripted in-process feed: snapshots
//! fill with fetched and derived data, failures keep stale data, and the
//! watch channel tears tasks down.

use anyhow::{Result, bail};
use async_trait::async_trait;
use botwatch::application::poller::{Cadence, FeedPoller};
use botwatch::application::snapshot::{DashboardSnapshot, SharedSnapshot};
use botwatch::domain::analytics::{DailyPnlEntry, EquityPoint};
use botwatch::domain::monitoring::{BotSummary, LogEntry, ModelStatus, OpenPosition};
use botwatch::domain::ports::DashboardFeed;
use chrono::NaiveDate;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::{RwLock, watch};

const CAPITAL: f64 = 10_000.0;

/// Serves a fixed three-point curve and one traded day; every call counts,
/// and the whole feed can be flipped into a failing state.
struct ScriptedFeed {
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl ScriptedFeed {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        }
    }

    fn check(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            bail!("backend unreachable");
        }
        Ok(())
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }
}

#[async_trait]
impl DashboardFeed for ScriptedFeed {
    async fn bot_summary(&self, bot: &str) -> Result<BotSummary> {
        self.check()?;
        Ok(BotSummary {
            id: bot.to_string(),
            name: String::new(),
            running: true,
            equity: 9_500.0,
            daily_pnl: -120.0,
            open_positions: 1,
            last_heartbeat: None,
        })
    }

    async fn equity_curve(&self, _bot: &str) -> Result<Vec<EquityPoint>> {
        self.check()?;
        Ok(vec![
            EquityPoint {
                date: Some(Self::date("2024-01-01")),
                equity: Some(10_000.0),
                ..Default::default()
            },
            EquityPoint {
                date: Some(Self::date("2024-01-02")),
                equity: Some(10_400.0),
                ..Default::default()
            },
            EquityPoint {
                date: Some(Self::date("2024-01-03")),
                equity: Some(9_500.0),
                ..Default::default()
            },
        ])
    }

    async fn intraday_equity(&self, _bot: &str) -> Result<Vec<EquityPoint>> {
        self.check()?;
        Ok(vec![EquityPoint {
            equity: Some(9_500.0),
            ..Default::default()
        }])
    }

    async fn daily_pnl(&self, _bot: &str) -> Result<Vec<DailyPnlEntry>> {
        self.check()?;
        Ok(vec![DailyPnlEntry {
            date: Self::date("2024-01-02"),
            daily_pnl: Some(400.0),
            trades: Some(3),
        }])
    }

    async fn open_positions(&self, _bot: &str) -> Result<Vec<OpenPosition>> {
        self.check()?;
        Ok(Vec::new())
    }

    async fn model_status(&self, _bot: &str) -> Result<Vec<ModelStatus>> {
        self.check()?;
        Ok(Vec::new())
    }

    async fn recent_logs(&self, _bot: &str, _limit: usize) -> Result<Vec<LogEntry>> {
        self.check()?;
        Ok(vec![LogEntry {
            timestamp: None,
            level: "INFO".to_string(),
            message: "tick".to_string(),
        }])
    }

    async fn trigger_training(&self, _bot: &str) -> Result<()> {
        self.check()
    }

    async fn approve_model(&self, _bot: &str, _model_id: &str) -> Result<()> {
        self.check()
    }

    async fn revoke_model(&self, _bot: &str, _model_id: &str) -> Result<()> {
        self.check()
    }
}

fn shared_snapshot() -> SharedSnapshot {
    Arc::new(RwLock::new(DashboardSnapshot::default()))
}

async fn wait_for<F>(snapshot: &SharedSnapshot, mut ready: F)
where
    F: FnMut(&DashboardSnapshot) -> bool,
{
    for _ in 0..200 {
        if ready(&*snapshot.read().await) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("snapshot never reached the expected state");
}

#[tokio::test]
async fn slow_refresh_populates_derived_analytics() {
    let feed = Arc::new(ScriptedFeed::new());
    let snapshot = shared_snapshot();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let poller = FeedPoller::new(feed.clone(), snapshot.clone(), CAPITAL, 50);
    let task = tokio::spawn(poller.run(
        "heracles".to_string(),
        Cadence::Slow,
        Duration::from_millis(10),
        shutdown_rx,
    ));

    wait_for(&snapshot, |snap| {
        snap.bots
            .get("heracles")
            .is_some_and(|b| !b.drawdown_curve.is_empty())
    })
    .await;

    {
        let snap = snapshot.read().await;
        let bot = &snap.bots["heracles"];
        assert_eq!(bot.equity_curve.len(), 3);
        // 9_500 against a 10_400 peak.
        assert_eq!(bot.max_drawdown(), -8.65);
        // Heatmap runs from the first traded day through today.
        assert_eq!(
            bot.heatmap.first().map(|d| d.date),
            Some("2024-01-02".parse().unwrap())
        );
        assert_eq!(bot.heatmap[0].pnl, Some(400.0));
        assert!(bot.last_refresh.is_some());
        assert!(bot.last_error.is_none());
    }

    shutdown_tx.send(true).unwrap();
    tokio::time::timeout(Duration::from_secs(1), task)
        .await
        .expect("poller ignored shutdown")
        .unwrap();
}

#[tokio::test]
async fn failed_refresh_keeps_stale_data_and_records_error() {
    let feed = Arc::new(ScriptedFeed::new());
    let snapshot = shared_snapshot();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let poller = FeedPoller::new(feed.clone(), snapshot.clone(), CAPITAL, 50);
    let task = tokio::spawn(poller.run(
        "heracles".to_string(),
        Cadence::Fast,
        Duration::from_millis(10),
        shutdown_rx,
    ));

    wait_for(&snapshot, |snap| {
        snap.bots.get("heracles").is_some_and(|b| b.summary.is_some())
    })
    .await;

    feed.failing.store(true, Ordering::SeqCst);
    wait_for(&snapshot, |snap| {
        snap.bots
            .get("heracles")
            .is_some_and(|b| b.last_error.is_some())
    })
    .await;

    {
        let snap = snapshot.read().await;
        let bot = &snap.bots["heracles"];
        // The last good fetch stays in place alongside the error.
        assert!(bot.summary.is_some());
        assert!(!bot.logs.is_empty());
        assert!(
            bot.last_error.as_deref().unwrap().contains("unreachable"),
            "unexpected error: {:?}",
            bot.last_error
        );
    }

    // Recovery clears the error on the next successful tick.
    feed.failing.store(false, Ordering::SeqCst);
    wait_for(&snapshot, |snap| {
        snap.bots
            .get("heracles")
            .is_some_and(|b| b.last_error.is_none())
    })
    .await;

    shutdown_tx.send(true).unwrap();
    tokio::time::timeout(Duration::from_secs(1), task)
        .await
        .expect("poller ignored shutdown")
        .unwrap();
}

#[tokio::test]
async fn shutdown_stops_polling() {
    let feed = Arc::new(ScriptedFeed::new());
    let snapshot = shared_snapshot();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let poller = FeedPoller::new(feed.clone(), snapshot.clone(), CAPITAL, 50);
    let task = tokio::spawn(poller.run(
        "orion".to_string(),
        Cadence::Fast,
        Duration::from_millis(10),
        shutdown_rx,
    ));

    wait_for(&snapshot, |snap| snap.bots.contains_key("orion")).await;
    shutdown_tx.send(true).unwrap();
    tokio::time::timeout(Duration::from_secs(1), task)
        .await
        .expect("poller ignored shutdown")
        .unwrap();

    let after = feed.calls.load(Ordering::SeqCst);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(feed.calls.load(Ordering::SeqCst), after);
}
