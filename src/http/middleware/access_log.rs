//! Access logging and request metrics.
//!
//! One log line per request: method, URI, status, response size and latency.

use axum::{
    body::HttpBody,
    extract::Request,
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::http::request::request_id;
use crate::observability::metrics;

pub async fn access_log(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = request_id(request.headers()).to_string();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let content_length = response
        .body()
        .size_hint()
        .exact()
        .map(|n| n.to_string())
        .unwrap_or_else(|| "-".to_string());
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

    tracing::info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status,
        content_length = %content_length,
        latency_ms,
        "Request completed"
    );
    metrics::record_request(method.as_str(), status, start);

    response
}
