// Model action dispatch
pub mod commands;

// UI-facing handle over the running system
pub mod client;

// UI state container
pub mod monitor_app;

// Periodic feed polling
pub mod poller;

// Latest fetched + derived data per bot
pub mod snapshot;

// System orchestrator
pub mod system;
