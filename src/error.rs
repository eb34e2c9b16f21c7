//! Custom error types and handling
//!
//! This module defines the application's error types and implements
//! conversion to HTTP responses for the Axum framework.
//!
//! Execution failures (compile error, wrong answer, ...) are not errors
//! here: they are regular 200 responses built by the execute handler.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::judge0::TransportError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors
    #[error("Invalid request body")]
    InvalidBody(String),

    #[error("Unsupported language")]
    UnsupportedLanguage,

    #[error("Validation error")]
    Validation(String),

    // Remote execution service errors
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::UnsupportedLanguage => "UNSUPPORTED_LANGUAGE",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Transport(_) => "JUDGE0_ERROR",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) | Self::UnsupportedLanguage | Self::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();

        let details = match &self {
            AppError::UnsupportedLanguage => None,
            AppError::InvalidBody(details) | AppError::Validation(details) => {
                Some(serde_json::Value::String(details.clone()))
            }
            AppError::Transport(e) => {
                tracing::error!(code, kind = e.kind(), details = %e.details(), "Error with Judge0 API: {}", e);
                Some(e.details())
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

// Body rejections use the same JSON envelope as every other error.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn render(error: AppError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_unsupported_language_body() {
        let (status, body) = render(AppError::UnsupportedLanguage).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Unsupported language"}));
    }

    #[tokio::test]
    async fn test_upstream_error_body() {
        let (status, body) = render(AppError::Transport(TransportError::Upstream {
            status: 403,
            status_text: "Forbidden".into(),
            body: json!({"message": "You are not subscribed to this API."}),
        }))
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({
                "error": "Judge0 API Error: 403 - Forbidden",
                "details": {"message": "You are not subscribed to this API."}
            })
        );
    }

    #[tokio::test]
    async fn test_unreachable_and_setup_bodies() {
        let (_, body) = render(AppError::Transport(TransportError::Unreachable(
            "connection refused".into(),
        )))
        .await;
        assert_eq!(body["error"], "No response received from Judge0 API");
        assert_eq!(body["details"], "connection refused");

        let (_, body) = render(AppError::Transport(TransportError::Setup("bad url".into()))).await;
        assert_eq!(body["error"], "Error setting up request to Judge0 API");
    }

    #[tokio::test]
    async fn test_validation_error_body() {
        let (status, body) = render(AppError::Validation("code: length".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Validation error", "details": "code: length"}));
    }

    #[tokio::test]
    async fn test_invalid_body_is_400_json() {
        let (status, body) = render(AppError::InvalidBody("missing field `language`".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"error": "Invalid request body", "details": "missing field `language`"})
        );
    }
}
