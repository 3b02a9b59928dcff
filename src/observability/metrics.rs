//! Metrics collection and exposition.
//!
//! # Metrics
//! - `tender_requests_total` (counter): requests by operation, status
//! - `tender_request_duration_seconds` (histogram): latency by operation
//! - `tender_ledger_entries` (gauge): tenders currently stored
//!
//! Recording is a no-op until a recorder is installed, so library code and
//! tests can call these freely.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a completed handler call.
pub fn record_request(operation: &'static str, status: u16, start: Instant) {
    metrics::counter!(
        "tender_requests_total",
        "operation" => operation,
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("tender_request_duration_seconds", "operation" => operation)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_ledger_size(entries: usize) {
    metrics::gauge!("tender_ledger_entries").set(entries as f64);
}
