//! Refresh and monitoring configuration parsing from environment variables.
//!
//! Fast feeds (status, intraday equity, positions, logs) and slow feeds
//! (daily equity curve, daily P&L, model registry) poll on separate cadences.

use anyhow::Result;
use std::env;

/// Monitoring environment configuration.
#[derive(Debug, Clone)]
pub struct RefreshEnvConfig {
    pub bots: Vec<String>,
    pub starting_capital: f64,
    pub fast_refresh_secs: u64,
    pub slow_refresh_secs: u64,
    pub log_tail_limit: usize,
}

impl Default for RefreshEnvConfig {
    fn default() -> Self {
        Self {
            bots: vec![
                "agape-spot".to_string(),
                "heracles".to_string(),
                "orion".to_string(),
            ],
            starting_capital: 10_000.0,
            fast_refresh_secs: 10,
            slow_refresh_secs: 60,
            log_tail_limit: 200,
        }
    }
}

impl RefreshEnvConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let bots = match env::var("BOTS") {
            Ok(raw) => {
                let parsed: Vec<String> = raw
                    .split(',')
                    .map(|s| s.trim().to_lowercase())
                    .filter(|s| !s.is_empty())
                    .collect();
                if parsed.is_empty() {
                    anyhow::bail!("BOTS is set but contains no bot ids: '{}'", raw);
                }
                parsed
            }
            Err(_) => defaults.bots,
        };

        let starting_capital = env::var("STARTING_CAPITAL")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(defaults.starting_capital);
        if starting_capital <= 0.0 {
            anyhow::bail!("STARTING_CAPITAL must be positive, got {starting_capital}");
        }

        Ok(Self {
            bots,
            starting_capital,
            // A zero-second interval would spin; clamp at 1s.
            fast_refresh_secs: parse_secs("FAST_REFRESH_SECS", defaults.fast_refresh_secs).max(1),
            slow_refresh_secs: parse_secs("SLOW_REFRESH_SECS", defaults.slow_refresh_secs).max(1),
            log_tail_limit: env::var("LOG_TAIL_LIMIT")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(defaults.log_tail_limit),
        })
    }
}

fn parse_secs(var: &str, default: u64) -> u64 {
    env::var(var)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}
