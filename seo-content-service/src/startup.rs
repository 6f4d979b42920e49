//! Application startup and lifecycle management.

use crate::config::SeoConfig;
use crate::handlers::{
    generate::generate, health::health_check, method_not_allowed, metrics::metrics_endpoint,
    not_found, preflight,
};
use axum::handler::HandlerWithoutStateExt;
use crate::services::providers::openrouter::OpenRouterProvider;
use crate::services::providers::TextProvider;
use crate::services::ContentGenerator;
use axum::{
    http::{header, Method},
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware,
    security_headers::security_headers_middleware,
    tracing::{make_request_span, request_id_middleware},
};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub generator: ContentGenerator,
}

impl AppState {
    pub fn new(generator: ContentGenerator) -> Self {
        Self { generator }
    }
}

/// Build the HTTP router. Paths no route claims are served from
/// `static_dir`, falling back to a JSON 404. Also usable on its own as a
/// `tower::Service` by hosts that do not want a listening socket.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(
            "/generate",
            post(generate)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_endpoint))
        .fallback_service(
            ServeDir::new(static_dir)
                .call_fallback_on_method_not_allowed(true)
                .not_found_service(not_found.into_service()),
        )
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(cors)
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
    static_dir: PathBuf,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: SeoConfig) -> Result<Self, AppError> {
        let provider = OpenRouterProvider::new(&config.openrouter).map_err(|e| {
            tracing::error!("Failed to initialize OpenRouter provider: {}", e);
            AppError::ConfigError(anyhow::Error::new(e))
        })?;
        let provider: Arc<dyn TextProvider> = Arc::new(provider);

        tracing::info!(
            model = %config.openrouter.model,
            base_url = %config.openrouter.base_url,
            timeout_secs = config.openrouter.timeout.as_secs(),
            "Initialized OpenRouter provider"
        );

        let generator = ContentGenerator::from_config(provider, &config.openrouter, config.prompt.clone());

        // port 0 = random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            static_dir = %config.static_dir.display(),
            "SEO content service listening on port {}",
            port
        );

        Ok(Self {
            port,
            listener,
            state: AppState::new(generator),
            static_dir: config.static_dir,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state, &self.static_dir);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                std::io::Error::other(format!("HTTP server error: {}", e))
            })
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
