//! Content generation: prompt, completion, and post-processing of the
//! model output into a [`GenerationResult`].

use super::metrics::record_provider_call;
use super::prompt::build_prompt;
use super::providers::{GenerationParams, ProviderError, TextProvider};
use crate::config::{OpenRouterConfig, PromptConfig};
use crate::models::{ContentKind, ContentType, Faq, GeneratedContent, GenerationRequest, GenerationResult};
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Model output is not valid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("Model output is not a JSON object")]
    NotAnObject,

    /// The message never carries `source`, which quotes model text.
    #[error("Model output for \"{content_type}\" is not {}", .content_type.kind().expected())]
    UnexpectedShape {
        content_type: ContentType,
        #[source]
        source: serde_json::Error,
    },
}

/// Generates SEO content through a [`TextProvider`].
#[derive(Clone)]
pub struct ContentGenerator {
    provider: Arc<dyn TextProvider>,
    params: GenerationParams,
    prompt: PromptConfig,
}

impl ContentGenerator {
    pub fn new(provider: Arc<dyn TextProvider>, params: GenerationParams, prompt: PromptConfig) -> Self {
        Self {
            provider,
            params,
            prompt,
        }
    }

    /// Generator with the model parameters taken from the OpenRouter config.
    pub fn from_config(
        provider: Arc<dyn TextProvider>,
        config: &OpenRouterConfig,
        prompt: PromptConfig,
    ) -> Self {
        let params = GenerationParams {
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: Some(config.max_tokens),
        };
        Self::new(provider, params, prompt)
    }

    #[tracing::instrument(
        skip(self, request),
        fields(product = %request.product_title, types = ?request.content_types)
    )]
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerationError> {
        let prompt = build_prompt(request, &self.prompt);

        let start = Instant::now();
        let outcome = self.provider.complete(&prompt, &self.params).await;
        record_provider_call(
            self.provider.name(),
            outcome.as_ref().err().map_or("ok", ProviderError::kind),
            start.elapsed(),
        );
        let raw = outcome?;

        let result = parse_generation(&raw, &request.content_types)?;
        tracing::info!(
            returned = result.len(),
            requested = request.content_types.len(),
            "Generated SEO content"
        );
        Ok(result)
    }
}

/// Remove a Markdown code fence (with optional language tag) around the
/// model output, if there is one.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(open) = trimmed.find("```") else {
        return trimmed;
    };

    let body = trimmed[open + 3..].trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    let body = match body.rfind("```") {
        Some(close) => &body[..close],
        None => body,
    };
    body.trim()
}

/// Parse model output and keep only the requested content types.
pub fn parse_generation(
    raw: &str,
    requested: &[ContentType],
) -> Result<GenerationResult, GenerationError> {
    // Fences are only stripped when the output does not parse as-is, so a
    // fence quoted inside a JSON string survives.
    let value: Value = match serde_json::from_str(raw.trim()) {
        Ok(value) => value,
        Err(_) => serde_json::from_str(strip_code_fences(raw)).map_err(|source| {
            tracing::error!(raw = %raw, error = %source, "Model output is not valid JSON");
            GenerationError::InvalidJson { source }
        })?,
    };

    let Value::Object(mut object) = value else {
        tracing::error!(raw = %raw, "Model output is not a JSON object");
        return Err(GenerationError::NotAnObject);
    };

    let mut result = GenerationResult::default();
    for content_type in requested {
        match object.remove(content_type.as_str()) {
            None | Some(Value::Null) => {
                tracing::warn!(content_type = %content_type, "Model omitted requested content type");
            }
            Some(value) => {
                let content = convert(*content_type, value).map_err(|source| {
                    tracing::error!(raw = %raw, content_type = %content_type, error = %source, "Unexpected content shape");
                    GenerationError::UnexpectedShape {
                        content_type: *content_type,
                        source,
                    }
                })?;
                result.insert(*content_type, content);
            }
        }
    }

    log_dropped_keys(&object);
    Ok(result)
}

fn convert(content_type: ContentType, value: Value) -> Result<GeneratedContent, serde_json::Error> {
    Ok(match content_type.kind() {
        ContentKind::Text => GeneratedContent::Text(serde_json::from_value(value)?),
        ContentKind::List => GeneratedContent::List(serde_json::from_value(value)?),
        ContentKind::Faqs => GeneratedContent::Faqs(serde_json::from_value::<Vec<Faq>>(value)?),
    })
}

fn log_dropped_keys(leftover: &Map<String, Value>) {
    if !leftover.is_empty() {
        let keys: Vec<&str> = leftover.keys().map(String::as_str).collect();
        tracing::debug!(?keys, "Dropping unrequested keys from model output");
    }
}
