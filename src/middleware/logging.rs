//! Logging middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::Request,
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::{info, warn, Instrument};
use uuid::Uuid;

/// Response header carrying the id logged with each request
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request logging middleware. Every request runs inside a span tagged with
/// a fresh request id, which is echoed back in the response headers.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    let start = Instant::now();
    let mut response = next.run(request).instrument(span.clone()).await;
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;
    let status = response.status();

    let _entered = span.enter();
    if status.is_server_error() {
        warn!(
            status = status.as_u16(),
            duration_ms = %format!("{:.2}", duration_ms),
            "Request failed"
        );
    } else if status.is_client_error() && status != StatusCode::NOT_FOUND {
        warn!(
            status = status.as_u16(),
            duration_ms = %format!("{:.2}", duration_ms),
            "Request rejected"
        );
    } else {
        info!(
            status = status.as_u16(),
            duration_ms = %format!("{:.2}", duration_ms),
            "Request completed"
        );
    }

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
