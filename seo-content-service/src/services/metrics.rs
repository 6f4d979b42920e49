//! Prometheus metrics for seo-content-service.
//!
//! HTTP request metrics come from the shared middleware; this module adds
//! upstream provider metrics and owns the exporter handle.

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::Duration;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder. Safe to call more than once.
pub fn init_metrics() {
    if METRICS_HANDLE.get().is_some() {
        return;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            let _ = METRICS_HANDLE.set(handle);
        }
        Err(e) => tracing::warn!("Failed to install Prometheus recorder: {}", e),
    }
}

/// Get metrics output in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Record one upstream completion call.
pub fn record_provider_call(provider: &'static str, outcome: &'static str, elapsed: Duration) {
    counter!("seo_provider_calls_total", "provider" => provider, "outcome" => outcome).increment(1);
    histogram!("seo_provider_latency_seconds", "provider" => provider).record(elapsed.as_secs_f64());
}
