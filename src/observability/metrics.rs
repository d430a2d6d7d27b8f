//! Metrics collection and exposition.
//!
//! # Metrics
//! - `phonebook_requests_total` (counter): requests by method, status
//! - `phonebook_request_duration_seconds` (histogram): latency by method
//! - `phonebook_people` (gauge): entries currently in the store
//!
//! # Design Decisions
//! - Recording is always on; it costs nothing until an exporter is installed
//! - Status is recorded as the numeric code to keep label cardinality bounded

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus exporter with an HTTP listener on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record a completed request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    let elapsed = start.elapsed().as_secs_f64();
    counter!(
        "phonebook_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("phonebook_request_duration_seconds", "method" => method.to_string())
        .record(elapsed);
}

/// Record the current number of entries in the store.
pub fn record_people(count: usize) {
    gauge!("phonebook_people").set(count as f64);
}
