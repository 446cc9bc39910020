//! Read-mostly records mirrored from the backend's monitoring endpoints.
//!
//! Every optional wire field is defaulted at this boundary so the rest of the
//! application never sees a half-formed value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Headline status of one bot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotSummary {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub running: bool,
    #[serde(default)]
    pub equity: f64,
    #[serde(default)]
    pub daily_pnl: f64,
    #[serde(default)]
    pub open_positions: u32,
    #[serde(default)]
    pub last_heartbeat: Option<DateTime<Utc>>,
}

impl BotSummary {
    /// The backend may omit the display name; fall back to the id.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSide {
    Long,
    Short,
}

impl std::fmt::Display for PositionSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PositionSide::Long => write!(f, "LONG"),
            PositionSide::Short => write!(f, "SHORT"),
        }
    }
}

/// One open position as reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenPosition {
    pub symbol: String,
    pub side: PositionSide,
    pub quantity: f64,
    pub entry_price: f64,
    #[serde(default)]
    pub mark_price: f64,
    #[serde(default)]
    pub unrealized_pnl: f64,
    #[serde(default)]
    pub opened_at: Option<DateTime<Utc>>,
}

/// Lifecycle stage of an ML model attached to a bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelStage {
    Training,
    Candidate,
    Approved,
    Revoked,
}

impl std::fmt::Display for ModelStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelStage::Training => write!(f, "TRAINING"),
            ModelStage::Candidate => write!(f, "CANDIDATE"),
            ModelStage::Approved => write!(f, "APPROVED"),
            ModelStage::Revoked => write!(f, "REVOKED"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelStatus {
    pub model_id: String,
    pub stage: ModelStage,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub trained_at: Option<DateTime<Utc>>,
}

/// One line from a bot's rolling log buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default = "default_level")]
    pub level: String,
    pub message: String,
}

fn default_level() -> String {
    "INFO".to_string()
}
