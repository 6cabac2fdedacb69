//! Metrics collection and exposition.
//!
//! # Metrics
//! - `proxy_requests_total` (counter): requests by outcome and status
//! - `proxy_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Low-overhead updates through the `metrics` facade
//! - Prometheus exposition runs on its own listener, off the data path

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus exposition endpoint.
///
/// Failure to start the exporter is logged and tolerated; the proxy
/// keeps serving without metrics.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to start metrics exporter"),
    }
}

/// Record one completed request.
pub fn record_request(outcome: &'static str, status: u16, start: Instant) {
    let status = status.to_string();
    metrics::counter!(
        "proxy_requests_total",
        "outcome" => outcome,
        "status" => status.clone()
    )
    .increment(1);
    metrics::histogram!(
        "proxy_request_duration_seconds",
        "outcome" => outcome,
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());
}
