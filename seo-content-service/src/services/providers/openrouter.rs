//! OpenRouter provider implementation.
//!
//! Speaks the OpenAI-compatible `/chat/completions` API exposed by
//! OpenRouter. Non-streaming only.

use super::{GenerationParams, ProviderError, TextProvider};
use crate::config::OpenRouterConfig;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

/// OpenRouter chat-completion provider.
pub struct OpenRouterProvider {
    client: Client,
    api_key: Secret<String>,
    base_url: String,
    app_title: String,
    referer: String,
}

impl OpenRouterProvider {
    /// Build a provider whose HTTP client enforces the configured timeout.
    pub fn new(config: &OpenRouterConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::NotConfigured(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            app_title: config.app_title.clone(),
            referer: config.referer.clone(),
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl TextProvider for OpenRouterProvider {
    async fn complete(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, ProviderError> {
        let request = ChatCompletionRequest {
            model: &params.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        };

        tracing::debug!(
            model = %params.model,
            prompt_len = prompt.len(),
            "Sending request to OpenRouter"
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.api_key.expose_secret())
            .header("X-Title", &self.app_title)
            .header("HTTP-Referer", &self.referer)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, timeout = e.is_timeout(), "OpenRouter request failed");
                ProviderError::from(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(ProviderError::from)?;

        if !status.is_success() {
            tracing::error!(
                status = status.as_u16(),
                body = %body,
                "OpenRouter returned an error response"
            );
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: ChatCompletionResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, body = %body, "OpenRouter envelope is not valid JSON");
            ProviderError::MalformedEnvelope(e.to_string())
        })?;

        envelope
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| {
                tracing::error!(body = %body, "OpenRouter response has no completion content");
                ProviderError::EmptyCompletion
            })
    }

    fn name(&self) -> &'static str {
        "openrouter"
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}
