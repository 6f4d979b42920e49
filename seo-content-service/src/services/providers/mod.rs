//! Chat-completion provider abstraction.
//!
//! The generator only needs "prompt in, text out"; providers own transport,
//! authentication and envelope decoding.

pub mod mock;
pub mod openrouter;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Request to provider timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response. `body` is the raw upstream payload.
    #[error("Provider returned HTTP {status}")]
    Upstream { status: u16, body: String },

    #[error("Provider response could not be decoded: {0}")]
    MalformedEnvelope(String),

    #[error("Provider returned no completion content")]
    EmptyCompletion,
}

impl ProviderError {
    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::NotConfigured(_) => "not_configured",
            ProviderError::Timeout => "timeout",
            ProviderError::Network(_) => "network",
            ProviderError::Upstream { .. } => "upstream_status",
            ProviderError::MalformedEnvelope(_) => "malformed_envelope",
            ProviderError::EmptyCompletion => "empty_completion",
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else if err.is_decode() {
            ProviderError::MalformedEnvelope(err.to_string())
        } else {
            ProviderError::Network(err.to_string())
        }
    }
}

/// Sampling parameters for one completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
}

/// Trait for text completion providers (e.g., OpenRouter).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Return the text of the first completion for a single user message.
    async fn complete(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, ProviderError>;

    /// Name used in logs and metrics.
    fn name(&self) -> &'static str;
}
