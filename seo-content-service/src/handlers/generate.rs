use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::models::{ContentType, GenerationRequest, GenerationResult, Keywords};
use crate::services::providers::ProviderError;
use crate::services::GenerationError;
use crate::startup::AppState;
use service_core::error::AppError;

/// Content types generated when the caller does not send `type`.
pub const DEFAULT_CONTENT_TYPES: [ContentType; 2] = [ContentType::Description, ContentType::Faqs];

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(alias = "productInfo")]
    pub product_title: Option<String>,
    #[serde(default)]
    pub keywords: Keywords,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type must list at least one content type"))]
    pub content_types: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub result: GenerationResult,
}

impl GenerateRequest {
    /// Check required fields and normalise into a domain request.
    pub fn into_generation_request(self) -> Result<GenerationRequest, AppError> {
        self.validate()?;

        let title = self
            .product_title
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("Missing productTitle")))?;

        let content_types = match self.content_types {
            Some(raw) => ContentType::parse_list(&raw)
                .map_err(|e| AppError::BadRequest(anyhow::Error::new(e)))?,
            None => DEFAULT_CONTENT_TYPES.to_vec(),
        };

        Ok(GenerationRequest::new(title, &self.keywords, content_types))
    }
}

#[tracing::instrument(skip(state, payload))]
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::BadRequest(anyhow::anyhow!("Invalid request body: {}", rejection.body_text()))
    })?;
    let request = payload.into_generation_request()?;

    let result = state.generator.generate(&request).await.map_err(|e| {
        tracing::error!(error = %e, "Content generation failed");
        upstream_error(e)
    })?;

    Ok(Json(GenerateResponse { result }))
}

fn upstream_error(err: GenerationError) -> AppError {
    match err {
        GenerationError::Provider(ProviderError::Upstream { status, body }) => AppError::Upstream {
            message: format!("Upstream API call failed (HTTP {})", status),
            details: Some(serde_json::from_str(&body).unwrap_or(Value::String(body))),
        },
        GenerationError::Provider(e) => AppError::Upstream {
            message: "Upstream API call failed".to_string(),
            details: Some(Value::String(e.to_string())),
        },
        content_error => AppError::Upstream {
            message: "Upstream returned invalid content".to_string(),
            details: Some(Value::String(content_error.to_string())),
        },
    }
}
