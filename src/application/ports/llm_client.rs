use async_trait::async_trait;

/// Single-turn text completion used for summaries.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("no API key configured for the summary model")]
    NotConfigured,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited by the model provider")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
