use thiserror::Error;

/// Errors surfaced by the remote dashboard API.
///
/// The analytic transforms themselves are total and never fail; everything
/// here classifies what the HTTP feed layer can run into.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("API key rejected by {endpoint}")]
    Unauthorized { endpoint: String },

    #[error("Endpoint not found: {endpoint}")]
    NotFound { endpoint: String },

    #[error("Rate limited on {endpoint}: retry after {retry_after_secs}s")]
    RateLimited {
        endpoint: String,
        retry_after_secs: u64,
    },

    #[error("Upstream error {status} on {endpoint}")]
    Upstream { status: u16, endpoint: String },

    #[error("Failed to decode response from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },
}

/// Errors raised when dispatching a model action (train/approve/revoke).
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown bot: {bot}")]
    UnknownBot { bot: String },

    #[error("Unknown model {model_id} for bot {bot}")]
    UnknownModel { bot: String, model_id: String },

    #[error("Command queue full, action dropped for {bot}")]
    QueueFull { bot: String },
}
