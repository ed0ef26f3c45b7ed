//! HTTP metrics: the Prometheus scrape endpoint plus the recording
//! middleware the router wraps every route with.

pub mod handlers;
pub mod middleware;

pub use handlers::{prometheus_metrics, MetricsState};
pub use middleware::http_metrics_middleware;
