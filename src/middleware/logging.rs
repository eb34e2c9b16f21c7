//! Logging middleware

use axum::{
    body::Body,
    extract::Request,
    http::{HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn, Instrument};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Request logging middleware.
///
/// Every request runs inside a span carrying a fresh `request_id`, so the
/// submission and poll logs of one execution can be correlated. The id is
/// echoed back in the `x-request-id` response header.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let span = tracing::info_span!("request", %request_id, %method, %path);
    let mut response = next.run(request).instrument(span.clone()).await;

    let status = response.status();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    let _entered = span.enter();
    if status.is_server_error() {
        warn!(status = status.as_u16(), %duration_ms, "Request completed with server error");
    } else if status.is_client_error() && status != StatusCode::NOT_FOUND {
        warn!(status = status.as_u16(), %duration_ms, "Request completed with client error");
    } else {
        info!(status = status.as_u16(), %duration_ms, "Request completed");
    }

    response
}
