#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, Response};
use seo_content_service::config::{OpenRouterConfig, PromptConfig, SeoConfig};
use seo_content_service::services::providers::mock::MockTextProvider;
use seo_content_service::services::providers::GenerationParams;
use seo_content_service::services::ContentGenerator;
use seo_content_service::startup::{build_router, AppState, Application};
use service_core::config::Config;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Router wired to a mock provider; the returned handle exposes call counts.
pub fn router_with_mock(provider: MockTextProvider) -> (axum::Router, Arc<MockTextProvider>) {
    let provider = Arc::new(provider);
    let generator = ContentGenerator::new(
        provider.clone(),
        GenerationParams {
            model: "test-model".to_string(),
            temperature: 0.7,
            max_tokens: Some(3500),
        },
        PromptConfig::default(),
    );
    (
        build_router(AppState::new(generator), &static_fixture_dir()),
        provider,
    )
}

/// Directory holding the demo page served by the static fallback.
pub fn static_fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/public")
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn test_config(upstream_base_url: &str) -> SeoConfig {
    SeoConfig {
        common: Config {
            port: 0,
            ..Config::default()
        },
        openrouter: OpenRouterConfig::new("test-api-key")
            .with_base_url(upstream_base_url)
            .with_timeout(Duration::from_secs(2)),
        prompt: PromptConfig::default(),
        static_dir: static_fixture_dir(),
        otlp_endpoint: None,
    }
}

/// Spawn the application on a random port and return the port number.
pub async fn spawn_app(upstream_base_url: &str) -> u16 {
    let app = Application::build(test_config(upstream_base_url))
        .await
        .expect("Failed to build application");
    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    port
}

/// OpenAI-compatible completion envelope wrapping `content`.
pub fn completion(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "gen-test",
        "model": "google/gemini-2.5-flash-lite",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}
