//! Request identification and per-request metrics.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) as early as possible
//! - Propagate it to the handler and echo it in the response
//! - Record the request counter and latency histogram
//!
//! # Design Decisions
//! - Incoming x-request-id values are not trusted; a fresh ID is minted
//!   for every request

use std::time::Instant;

use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::observability::metrics;

/// Header carrying the per-request correlation id.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Middleware stamping each request/response pair with an ID and
/// recording request metrics.
pub async fn request_id_middleware(mut request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().to_string();

    // UUIDs are plain ASCII, always a valid header value.
    let header_value = HeaderValue::from_str(&request_id).unwrap();
    request.headers_mut().insert(X_REQUEST_ID, header_value.clone());

    let mut response = next.run(request).await;

    metrics::record_request(&method, response.status().as_u16(), start);
    response.headers_mut().insert(X_REQUEST_ID, header_value);
    response
}
