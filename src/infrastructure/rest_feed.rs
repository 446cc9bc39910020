//! REST implementation of the dashboard feed.
//!
//! Thin pass-through client: every method maps to one GET/POST against the
//! backend, decoding straight into the domain records. The backend owns all
//! computation; this side only polls and renders.

use crate::domain::analytics::{DailyPnlEntry, EquityPoint};
use crate::domain::errors::FeedError;
use crate::domain::monitoring::{BotSummary, LogEntry, ModelStatus, OpenPosition};
use crate::domain::ports::DashboardFeed;
use crate::infrastructure::http_client_factory::HttpClientFactory;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest_middleware::ClientWithMiddleware;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const API_KEY_HEADER: &str = "X-Api-Key";

pub struct RestFeed {
    client: ClientWithMiddleware,
    base_url: String,
    api_key: String,
}

impl RestFeed {
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> Self {
        Self {
            client: HttpClientFactory::create_client(timeout),
            base_url,
            api_key,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("RestFeed: GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .with_context(|| format!("GET {} failed", path))?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok());
            return Err(Self::status_error(status, path, retry_after).into());
        }

        response.json::<T>().await.map_err(|e| {
            FeedError::Decode {
                endpoint: path.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    async fn post_action(&self, path: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        debug!("RestFeed: POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .with_context(|| format!("POST {} failed", path))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status, path, None).into());
        }
        Ok(())
    }

    fn status_error(status: StatusCode, endpoint: &str, retry_after: Option<u64>) -> FeedError {
        let endpoint = endpoint.to_string();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => FeedError::Unauthorized { endpoint },
            StatusCode::NOT_FOUND => FeedError::NotFound { endpoint },
            StatusCode::TOO_MANY_REQUESTS => FeedError::RateLimited {
                endpoint,
                retry_after_secs: retry_after.unwrap_or(60),
            },
            _ => FeedError::Upstream {
                status: status.as_u16(),
                endpoint,
            },
        }
    }
}

#[async_trait]
impl DashboardFeed for RestFeed {
    async fn bot_summary(&self, bot: &str) -> Result<BotSummary> {
        self.get_json(&format!("/bots/{}/status", bot)).await
    }

    async fn equity_curve(&self, bot: &str) -> Result<Vec<EquityPoint>> {
        self.get_json(&format!("/bots/{}/equity-curve", bot)).await
    }

    async fn intraday_equity(&self, bot: &str) -> Result<Vec<EquityPoint>> {
        self.get_json(&format!("/bots/{}/equity-intraday", bot))
            .await
    }

    async fn daily_pnl(&self, bot: &str) -> Result<Vec<DailyPnlEntry>> {
        self.get_json(&format!("/bots/{}/daily-pnl", bot)).await
    }

    async fn open_positions(&self, bot: &str) -> Result<Vec<OpenPosition>> {
        self.get_json(&format!("/bots/{}/positions", bot)).await
    }

    async fn model_status(&self, bot: &str) -> Result<Vec<ModelStatus>> {
        self.get_json(&format!("/bots/{}/models", bot)).await
    }

    async fn recent_logs(&self, bot: &str, limit: usize) -> Result<Vec<LogEntry>> {
        self.get_json(&format!("/bots/{}/logs?limit={}", bot, limit))
            .await
    }

    async fn trigger_training(&self, bot: &str) -> Result<()> {
        self.post_action(&format!("/bots/{}/models/train", bot))
            .await
    }

    async fn approve_model(&self, bot: &str, model_id: &str) -> Result<()> {
        self.post_action(&format!("/bots/{}/models/{}/approve", bot, model_id))
            .await
    }

    async fn revoke_model(&self, bot: &str, model_id: &str) -> Result<()> {
        self.post_action(&format!("/bots/{}/models/{}/revoke", bot, model_id))
            .await
    }
}
