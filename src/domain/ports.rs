use crate::domain::analytics::{DailyPnlEntry, EquityPoint};
use crate::domain::monitoring::{BotSummary, LogEntry, ModelStatus, OpenPosition};
use anyhow::Result;
use async_trait::async_trait;

/// Read side of the remote dashboard API, plus the three pass-through model
/// actions. Implemented by the REST client and by the offline mock feed.
#[async_trait]
pub trait DashboardFeed: Send + Sync {
    async fn bot_summary(&self, bot: &str) -> Result<BotSummary>;
    async fn equity_curve(&self, bot: &str) -> Result<Vec<EquityPoint>>;
    async fn intraday_equity(&self, bot: &str) -> Result<Vec<EquityPoint>>;
    async fn daily_pnl(&self, bot: &str) -> Result<Vec<DailyPnlEntry>>;
    async fn open_positions(&self, bot: &str) -> Result<Vec<OpenPosition>>;
    async fn model_status(&self, bot: &str) -> Result<Vec<ModelStatus>>;
    async fn recent_logs(&self, bot: &str, limit: usize) -> Result<Vec<LogEntry>>;

    async fn trigger_training(&self, bot: &str) -> Result<()>;
    async fn approve_model(&self, bot: &str, model_id: &str) -> Result<()>;
    async fn revoke_model(&self, bot: &str, model_id: &str) -> Result<()>;
}
