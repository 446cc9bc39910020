//! Offline synthetic feed.
//!
//! Generates a deterministic (seeded per bot id) random-walk equity history
//! so the dashboard can be demoed and integration-tested without a backend.
//! Model actions mutate the in-memory registry the way the real API would.

use crate::domain::analytics::{DailyPnlEntry, EquityPoint};
use crate::domain::errors::CommandError;
use crate::domain::monitoring::{
    BotSummary, LogEntry, ModelStage, ModelStatus, OpenPosition, PositionSide,
};
use crate::domain::ports::DashboardFeed;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{Datelike, Days, Duration as ChronoDuration, Local, NaiveDate, Utc, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use tokio::sync::Mutex;
use tracing::info;

const HISTORY_DAYS: u64 = 120;

struct MockBotData {
    curve: Vec<EquityPoint>,
    intraday: Vec<EquityPoint>,
    daily: Vec<DailyPnlEntry>,
    positions: Vec<OpenPosition>,
    models: Mutex<Vec<ModelStatus>>,
    logs: Vec<LogEntry>,
}

pub struct MockFeed {
    starting_capital: f64,
    bots: HashMap<String, MockBotData>,
}

impl MockFeed {
    pub fn new(bots: &[String], starting_capital: f64) -> Self {
        let bots = bots
            .iter()
            .map(|id| (id.clone(), generate_bot(id, starting_capital)))
            .collect();
        Self {
            starting_capital,
            bots,
        }
    }

    fn bot(&self, bot: &str) -> Result<&MockBotData> {
        self.bots.get(bot).ok_or_else(|| {
            CommandError::UnknownBot {
                bot: bot.to_string(),
            }
            .into()
        })
    }
}

fn seed_for(bot: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    bot.hash(&mut hasher);
    hasher.finish()
}

fn generate_bot(bot: &str, starting_capital: f64) -> MockBotData {
    let mut rng = StdRng::seed_from_u64(seed_for(bot));

    let today = Local::now().date_naive();
    let start = today
        .checked_sub_days(Days::new(HISTORY_DAYS - 1))
        .unwrap_or(today);

    let mut curve = Vec::new();
    let mut daily = Vec::new();
    let mut equity = starting_capital;
    let mut day = start;

    while day <= today {
        let prev = equity;
        equity = (equity * (1.0 + rng.random_range(-0.015..0.018))).max(0.0);

        // Weekends and a slice of weekdays stay flat, leaving calendar gaps.
        let weekend = matches!(day.weekday(), Weekday::Sat | Weekday::Sun);
        let traded = !weekend && rng.random_range(0..10_u32) >= 3;

        let (daily_pnl, trades) = if traded {
            let trades = rng.random_range(1..9_u32);
            (equity - prev, trades)
        } else {
            equity = prev;
            (0.0, 0)
        };

        curve.push(EquityPoint {
            date: Some(day),
            time: None,
            equity: Some(equity),
            daily_pnl: Some(daily_pnl),
            trades: Some(trades),
        });

        if traded {
            daily.push(DailyPnlEntry {
                date: day,
                daily_pnl: Some(daily_pnl),
                trades: Some(trades),
            });
        }

        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    let intraday = generate_intraday(&mut rng, equity);
    let positions = generate_positions(&mut rng, bot);
    let models = Mutex::new(generate_models(&mut rng, bot, today));
    let logs = generate_logs(bot);

    MockBotData {
        curve,
        intraday,
        daily,
        positions,
        models,
        logs,
    }
}

fn generate_intraday(rng: &mut StdRng, last_equity: f64) -> Vec<EquityPoint> {
    let now = Utc::now();
    (0..16)
        .rev()
        .map(|half_hours| {
            let time = now - ChronoDuration::minutes(30 * half_hours);
            let jitter = 1.0 + rng.random_range(-0.004..0.004);
            EquityPoint {
                date: None,
                time: Some(time),
                equity: Some(last_equity * jitter),
                daily_pnl: None,
                trades: None,
            }
        })
        .collect()
}

fn generate_positions(rng: &mut StdRng, bot: &str) -> Vec<OpenPosition> {
    let universe = [("BTCUSDT", 64_000.0), ("ETHUSDT", 3_400.0), ("SOLUSDT", 150.0)];

    universe
        .iter()
        .take(rng.random_range(1..=universe.len()))
        .map(|&(symbol, price)| {
            let entry_price = price * (1.0 + rng.random_range(-0.03..0.03));
            let mark_price = price * (1.0 + rng.random_range(-0.02..0.02));
            let quantity = rng.random_range(0.1..2.0_f64);
            let side = if rng.random_range(0..2) == 0 {
                PositionSide::Long
            } else {
                PositionSide::Short
            };
            let direction = match side {
                PositionSide::Long => 1.0,
                PositionSide::Short => -1.0,
            };

            OpenPosition {
                symbol: symbol.to_string(),
                side,
                quantity,
                entry_price,
                mark_price,
                unrealized_pnl: (mark_price - entry_price) * quantity * direction,
                opened_at: Some(Utc::now() - ChronoDuration::hours(rng.random_range(1..48))),
            }
        })
        .inspect(|pos| {
            info!(
                "MockFeed[{}]: seeded position {} {} {:.3}",
                bot, pos.side, pos.symbol, pos.quantity
            );
        })
        .collect()
}

fn generate_models(rng: &mut StdRng, bot: &str, today: NaiveDate) -> Vec<ModelStatus> {
    let stages = [ModelStage::Approved, ModelStage::Candidate, ModelStage::Revoked];

    stages
        .iter()
        .enumerate()
        .map(|(i, stage)| ModelStatus {
            model_id: format!("{}-m{}", bot, i + 1),
            stage: *stage,
            accuracy: Some(rng.random_range(0.52..0.68)),
            trained_at: today
                .checked_sub_days(Days::new((i as u64 + 1) * 7))
                .and_then(|d| d.and_hms_opt(6, 30, 0))
                .map(|dt| dt.and_utc()),
        })
        .collect()
}

fn generate_logs(bot: &str) -> Vec<LogEntry> {
    let lines = [
        ("INFO", "signal evaluated, no entry"),
        ("INFO", "order filled"),
        ("WARN", "spread wider than limit, order skipped"),
        ("INFO", "position closed, pnl booked"),
        ("ERROR", "exchange request timed out, retrying"),
        ("INFO", "heartbeat ok"),
    ];
    let now = Utc::now();

    lines
        .iter()
        .cycle()
        .take(24)
        .enumerate()
        .map(|(i, (level, message))| LogEntry {
            timestamp: Some(now - ChronoDuration::minutes((24 - i) as i64)),
            level: level.to_string(),
            message: format!("{}: {}", bot, message),
        })
        .collect()
}

#[async_trait]
impl DashboardFeed for MockFeed {
    async fn bot_summary(&self, bot: &str) -> Result<BotSummary> {
        let data = self.bot(bot)?;
        let equity = data
            .curve
            .last()
            .and_then(|p| p.equity)
            .unwrap_or(self.starting_capital);
        let daily_pnl = data.daily.last().and_then(|e| e.daily_pnl).unwrap_or(0.0);

        Ok(BotSummary {
            id: bot.to_string(),
            name: bot.to_uppercase(),
            running: true,
            equity,
            daily_pnl,
            open_positions: data.positions.len() as u32,
            last_heartbeat: Some(Utc::now()),
        })
    }

    async fn equity_curve(&self, bot: &str) -> Result<Vec<EquityPoint>> {
        Ok(self.bot(bot)?.curve.clone())
    }

    async fn intraday_equity(&self, bot: &str) -> Result<Vec<EquityPoint>> {
        Ok(self.bot(bot)?.intraday.clone())
    }

    async fn daily_pnl(&self, bot: &str) -> Result<Vec<DailyPnlEntry>> {
        Ok(self.bot(bot)?.daily.clone())
    }

    async fn open_positions(&self, bot: &str) -> Result<Vec<OpenPosition>> {
        Ok(self.bot(bot)?.positions.clone())
    }

    async fn model_status(&self, bot: &str) -> Result<Vec<ModelStatus>> {
        Ok(self.bot(bot)?.models.lock().await.clone())
    }

    async fn recent_logs(&self, bot: &str, limit: usize) -> Result<Vec<LogEntry>> {
        let logs = &self.bot(bot)?.logs;
        let skip = logs.len().saturating_sub(limit);
        Ok(logs[skip..].to_vec())
    }

    async fn trigger_training(&self, bot: &str) -> Result<()> {
        let mut models = self.bot(bot)?.models.lock().await;
        let model_id = format!("{}-m{}", bot, models.len() + 1);
        info!("MockFeed[{}]: training started for {}", bot, model_id);
        models.push(ModelStatus {
            model_id,
            stage: ModelStage::Training,
            accuracy: None,
            trained_at: None,
        });
        Ok(())
    }

    async fn approve_model(&self, bot: &str, model_id: &str) -> Result<()> {
        let mut models = self.bot(bot)?.models.lock().await;
        let model = models
            .iter_mut()
            .find(|m| m.model_id == model_id)
            .ok_or_else(|| CommandError::UnknownModel {
                bot: bot.to_string(),
                model_id: model_id.to_string(),
            })?;
        model.stage = ModelStage::Approved;
        info!("MockFeed[{}]: approved {}", bot, model_id);
        Ok(())
    }

    async fn revoke_model(&self, bot: &str, model_id: &str) -> Result<()> {
        let mut models = self.bot(bot)?.models.lock().await;
        let model = models
            .iter_mut()
            .find(|m| m.model_id == model_id)
            .ok_or_else(|| CommandError::UnknownModel {
                bot: bot.to_string(),
                model_id: model_id.to_string(),
            })?;
        model.stage = ModelStage::Revoked;
        info!("MockFeed[{}]: revoked {}", bot, model_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed() -> MockFeed {
        MockFeed::new(&["agape-spot".to_string()], 10_000.0)
    }

    #[test]
    fn test_mock_curve_is_deterministic_per_bot() {
        let a = feed();
        let b = feed();
        let curve_a = tokio_test::block_on(a.equity_curve("agape-spot")).unwrap();
        let curve_b = tokio_test::block_on(b.equity_curve("agape-spot")).unwrap();
        assert_eq!(curve_a.len(), HISTORY_DAYS as usize);
        assert_eq!(curve_a, curve_b);
    }

    #[test]
    fn test_daily_pnl_is_sparse() {
        let feed = feed();
        let daily = tokio_test::block_on(feed.daily_pnl("agape-spot")).unwrap();
        let curve = tokio_test::block_on(feed.equity_curve("agape-spot")).unwrap();
        assert!(!daily.is_empty());
        // Weekends never trade, so the sparse feed is strictly shorter.
        assert!(daily.len() < curve.len());
    }

    #[test]
    fn test_unknown_bot_is_rejected() {
        let feed = feed();
        assert!(tokio_test::block_on(feed.bot_summary("nope")).is_err());
    }

    #[test]
    fn test_model_lifecycle_actions() {
        let feed = feed();
        tokio_test::block_on(feed.trigger_training("agape-spot")).unwrap();
        let models = tokio_test::block_on(feed.model_status("agape-spot")).unwrap();
        assert_eq!(models.len(), 4);
        assert_eq!(models[3].stage, ModelStage::Training);

        let id = models[3].model_id.clone();
        tokio_test::block_on(feed.approve_model("agape-spot", &id)).unwrap();
        let models = tokio_test::block_on(feed.model_status("agape-spot")).unwrap();
        assert_eq!(models[3].stage, ModelStage::Approved);

        assert!(tokio_test::block_on(feed.revoke_model("agape-spot", "missing")).is_err());
    }
}
