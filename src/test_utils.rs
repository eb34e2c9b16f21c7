//! Test utilities: application wiring around a mocked Judge0 backend

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::config::{Config, Judge0Config, PollingConfig, ServerConfig};
use crate::execution::CancelSignal;
use crate::handlers;
use crate::judge0::MockExecutionBackend;
use crate::state::AppState;

/// Configuration that never touches the environment
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        judge0: Judge0Config {
            api_key: "test-key".to_string(),
            api_host: "judge0.test".to_string(),
            base_url: "http://judge0.test".to_string(),
            request_timeout: Duration::from_secs(5),
        },
        polling: PollingConfig {
            interval_ms: 2000,
            max_attempts: 5,
            deadline_secs: 60,
        },
    }
}

/// Full router backed by `backend`
pub fn test_app(backend: MockExecutionBackend) -> Router {
    let state = AppState::new(Arc::new(backend), test_config(), CancelSignal::never());
    handlers::router(state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}
