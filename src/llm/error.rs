//! Provider error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("rate limit exceeded: retry after {retry_after_ms}ms")]
    RateLimited { retry_after_ms: u64 },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("content filtered: {reason}")]
    ContentFiltered { reason: String },

    #[error("prompt error: {0}")]
    Prompt(#[from] crate::prompt::TemplateError),

    #[error("provider unavailable: {provider}")]
    Unavailable { provider: String },
}
