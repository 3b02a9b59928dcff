//! Request identification.
//!
//! # Responsibilities
//! - Name the request ID header
//! - Read the ID stamped by `SetRequestIdLayer`
//! - Open the per-request trace span carrying that ID
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - IDs are UUID v4; an incoming `x-request-id` is kept as is

use axum::extract::Request;
use tracing::Span;

/// Header carrying the request ID, in both directions.
pub const X_REQUEST_ID: &str = "x-request-id";

/// The request ID, or `"unknown"` if none was set.
pub fn request_id(request: &Request) -> &str {
    request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// Span for `TraceLayer`, tagged with method, path and request ID.
pub fn request_span(request: &Request) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id(request),
    )
}
