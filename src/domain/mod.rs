// Equity analytics (drawdown, daily P&L heatmap)
pub mod analytics;

// Domain-specific error types
pub mod errors;

// Monitoring data model (bot status, positions, models, logs)
pub mod monitoring;

// Port interfaces
pub mod ports;
