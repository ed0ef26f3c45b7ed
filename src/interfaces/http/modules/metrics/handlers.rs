//! Prometheus scrape endpoint.
//!
//! Rendering goes through the `PrometheusHandle` produced when the global
//! recorder is installed at startup; the handler itself holds no counters.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use metrics_exporter_prometheus::PrometheusHandle;

/// Exposition format of the rendered body.
const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// State for the scrape route: the render handle of the installed recorder.
#[derive(Clone)]
pub struct MetricsState {
    pub handle: PrometheusHandle,
}

/// `GET /metrics` — renders the recorder snapshot in Prometheus text format.
pub async fn prometheus_metrics(State(state): State<MetricsState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", PROMETHEUS_CONTENT_TYPE)],
        state.handle.render(),
    )
}

// ── Tests ──────────────────────────────────────────────────────
