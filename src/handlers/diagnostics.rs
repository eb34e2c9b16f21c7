//! Judge0 connectivity diagnostics

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::{services::ExecutionService, state::AppState};

/// Diagnostic response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// List the languages Judge0 supports to prove the credentials work
async fn test_judge0(State(state): State<AppState>) -> Response {
    match ExecutionService::check_upstream(state.backend()).await {
        Ok(count) => Json(DiagnosticResponse {
            success: true,
            message: Some("Judge0 API is working".to_string()),
            languages_count: Some(count),
            error: None,
            details: None,
        })
        .into_response(),
        Err(e) => {
            tracing::error!(
                host = %state.config().judge0.api_host,
                kind = e.kind(),
                details = %e.details(),
                "Judge0 API test failed"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DiagnosticResponse {
                    success: false,
                    message: None,
                    languages_count: None,
                    error: Some("Judge0 API test failed".to_string()),
                    details: Some(e.details()),
                }),
            )
                .into_response()
        }
    }
}

/// Diagnostic routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/test-judge0", get(test_judge0))
}
