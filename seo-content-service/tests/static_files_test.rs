//! Demo frontend served from the static directory.

mod common;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use common::{body_json, router_with_mock, spawn_app};
use seo_content_service::services::providers::mock::MockTextProvider;
use tower::ServiceExt;

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn index_page_is_served_at_root() {
    let (app, provider) = router_with_mock(MockTextProvider::replying("{}"));

    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
    let csp = response.headers()[header::CONTENT_SECURITY_POLICY]
        .to_str()
        .unwrap()
        .to_string();
    assert!(csp.starts_with("default-src 'self'"));

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("SEO content demo"));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn files_are_served_by_name() {
    let (app, _provider) = router_with_mock(MockTextProvider::replying("{}"));

    let response = app.oneshot(get("/index.html")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_file_is_json_not_found() {
    let (app, _provider) = router_with_mock(MockTextProvider::replying("{}"));

    let response = app.oneshot(get("/app.js")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Route not found");
}

#[tokio::test]
async fn post_to_unrouted_path_is_not_found() {
    let (app, _provider) = router_with_mock(MockTextProvider::replying("{}"));

    let request = Request::builder()
        .method("POST")
        .uri("/index.html")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn running_server_serves_demo_page() {
    let port = spawn_app("http://127.0.0.1:9").await;

    let response = reqwest::get(format!("http://127.0.0.1:{}/", port))
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    assert!(response.text().await.unwrap().contains("<form id=\"generate\">"));
}
