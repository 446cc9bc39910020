//! Fixed-interval feed polling.
//!
//! One task per (bot, cadence). Each tick fetches its feeds to completion
//! before the next tick is honored, so there is at most one in-flight fetch
//! per data source. Teardown is cooperative via a shared watch channel.

use crate::application::snapshot::SharedSnapshot;
use crate::domain::analytics::{build_heatmap_days_local, compute_drawdown};
use crate::domain::ports::DashboardFeed;
use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

/// Which feed group a poller refreshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    /// Status, intraday equity, open positions, recent logs.
    Fast,
    /// Daily equity curve, daily P&L, model registry.
    Slow,
}

pub struct FeedPoller {
    feed: Arc<dyn DashboardFeed>,
    snapshot: SharedSnapshot,
    starting_capital: f64,
    log_tail_limit: usize,
}

impl FeedPoller {
    pub fn new(
        feed: Arc<dyn DashboardFeed>,
        snapshot: SharedSnapshot,
        starting_capital: f64,
        log_tail_limit: usize,
    ) -> Self {
        Self {
            feed,
            snapshot,
            starting_capital,
            log_tail_limit,
        }
    }

    pub async fn run(
        self,
        bot: String,
        cadence: Cadence,
        period: Duration,
        mut shutdown: watch::Receiver<bool>,
    ) {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let result = match cadence {
                        Cadence::Fast => self.refresh_fast(&bot).await,
                        Cadence::Slow => self.refresh_slow(&bot).await,
                    };

                    if let Err(e) = result {
                        warn!("Poller[{}/{:?}]: refresh failed: {:#}", bot, cadence, e);
                        let mut snap = self.snapshot.write().await;
                        let entry = snap.bots.entry(bot.clone()).or_default();
                        entry.last_error = Some(format!("{e:#}"));
                    }
                }
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        debug!("Poller[{}/{:?}]: shutdown", bot, cadence);
                        break;
                    }
                }
            }
        }
    }

    async fn refresh_fast(&self, bot: &str) -> Result<()> {
        let summary = self.feed.bot_summary(bot).await?;
        let intraday = self.feed.intraday_equity(bot).await?;
        let positions = self.feed.open_positions(bot).await?;
        let logs = self.feed.recent_logs(bot, self.log_tail_limit).await?;

        let mut snap = self.snapshot.write().await;
        let entry = snap.bots.entry(bot.to_string()).or_default();
        entry.summary = Some(summary);
        entry.intraday = intraday;
        entry.positions = positions;
        entry.logs = logs;
        entry.last_refresh = Some(Utc::now());
        entry.last_error = None;
        Ok(())
    }

    async fn refresh_slow(&self, bot: &str) -> Result<()> {
        let curve = self.feed.equity_curve(bot).await?;
        let daily = self.feed.daily_pnl(bot).await?;
        let models = self.feed.model_status(bot).await?;

        // Derived analytics are recomputed whole on every refresh.
        let drawdown_curve = compute_drawdown(&curve, self.starting_capital);
        let heatmap = build_heatmap_days_local(&daily);

        let mut snap = self.snapshot.write().await;
        let entry = snap.bots.entry(bot.to_string()).or_default();
        entry.equity_curve = curve;
        entry.drawdown_curve = drawdown_curve;
        entry.heatmap = heatmap;
        entry.models = models;
        entry.last_refresh = Some(Utc::now());
        entry.last_error = None;
        Ok(())
    }
}
