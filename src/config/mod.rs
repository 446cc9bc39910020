//! Configuration module for Botwatch.
//!
//! Structured configuration loading from environment variables, organized by
//! concern: the remote dashboard API and the refresh/monitoring behavior.

mod api_config;
mod refresh_config;

pub use api_config::ApiEnvConfig;
pub use refresh_config::RefreshEnvConfig;

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Data source selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Deterministic synthetic feed, no network. Useful for demos and tests.
    Mock,
    /// Live REST API polling.
    Rest,
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(Mode::Mock),
            "rest" => Ok(Mode::Rest),
            _ => anyhow::bail!("Invalid MODE: {}. Must be 'mock' or 'rest'", s),
        }
    }
}

/// Main application configuration.
///
/// Aggregates the sub-configs and exposes flat field access for the rest of
/// the application.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,

    // API (from ApiEnvConfig)
    pub api_base_url: String,
    pub api_key: String,
    pub http_timeout_secs: u64,

    // Monitoring (from RefreshEnvConfig)
    pub bots: Vec<String>,
    pub starting_capital: f64,
    pub fast_refresh_secs: u64,
    pub slow_refresh_secs: u64,
    pub log_tail_limit: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let mode_str = env::var("MODE").unwrap_or_else(|_| "mock".to_string());
        let mode = Mode::from_str(&mode_str)?;

        let api = ApiEnvConfig::from_env();
        let refresh = RefreshEnvConfig::from_env().context("Failed to load refresh config")?;

        Ok(Self {
            mode,

            api_base_url: api.base_url,
            api_key: api.api_key,
            http_timeout_secs: api.timeout_secs,

            bots: refresh.bots,
            starting_capital: refresh.starting_capital,
            fast_refresh_secs: refresh.fast_refresh_secs,
            slow_refresh_secs: refresh.slow_refresh_secs,
            log_tail_limit: refresh.log_tail_limit,
        })
    }
}
