mod types;

pub use types::{BotSummary, LogEntry, ModelStage, ModelStatus, OpenPosition, PositionSide};
