//! HTTP handlers for the SEO content service.

pub mod generate;
pub mod health;
pub mod metrics;

use axum::http::StatusCode;
use service_core::error::AppError;

/// `OPTIONS` on API routes. Inside `build_router` the CORS layer answers
/// first; this keeps the route well-behaved when mounted without it.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

pub async fn not_found() -> AppError {
    AppError::NotFound(anyhow::anyhow!("Route not found"))
}
