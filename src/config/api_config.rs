//! Remote dashboard API configuration parsing from environment variables.

use std::env;

/// Dashboard API connection configuration.
#[derive(Debug, Clone)]
pub struct ApiEnvConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for ApiEnvConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080/api".to_string(),
            api_key: String::new(),
            timeout_secs: 15,
        }
    }
}

impl ApiEnvConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let mut base_url =
            env::var("DASHBOARD_API_URL").unwrap_or_else(|_| defaults.base_url.clone());
        // Endpoint paths are joined with a leading slash.
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            api_key: env::var("DASHBOARD_API_KEY").unwrap_or_default(),
            timeout_secs: env::var("DASHBOARD_API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }
}
