//! Metrics collection and exposition.
//!
//! # Metrics
//! - `edgefn_requests_total` (counter): handled requests by method, status
//! - `edgefn_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Prometheus exposition on its own scrape address, gated by config
//! - Server mode only; a one-shot process has nothing to scrape

use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus exporter and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
    {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint started"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one handled request.
pub fn record_request(method: &str, status: u16, start_time: Instant) {
    metrics::counter!(
        "edgefn_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!(
        "edgefn_request_duration_seconds",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .record(start_time.elapsed().as_secs_f64());
}
