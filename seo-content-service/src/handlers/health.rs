use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe. Does not touch the upstream provider.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "seo-content-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
