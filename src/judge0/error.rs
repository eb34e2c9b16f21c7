//! Transport errors raised while talking to Judge0

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

/// Network/HTTP failure talking to the remote execution service.
///
/// Distinct from execution failures: those are normal outcomes carried in
/// a successful response.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Judge0 answered with a non-2xx status
    #[error("Judge0 API Error: {status} - {status_text}")]
    Upstream {
        status: u16,
        status_text: String,
        body: Value,
    },

    /// The request went out but no response came back
    #[error("No response received from Judge0 API")]
    Unreachable(String),

    /// The request could not be built; nothing was sent
    #[error("Error setting up request to Judge0 API")]
    Setup(String),

    /// 2xx answer whose body is not the expected payload
    #[error("Invalid response from Judge0 API")]
    InvalidResponse(String),

    #[error("Judge0 polling did not complete")]
    DeadlineExceeded { elapsed: Duration },

    #[error("Judge0 polling did not complete")]
    AttemptsExhausted { attempts: u32 },

    #[error("Execution cancelled")]
    Cancelled,
}

impl TransportError {
    /// Build an `Upstream` error from a non-success response
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or("").to_string();
        let body = match response.text().await {
            Ok(text) => serde_json::from_str(&text).unwrap_or(Value::String(text)),
            Err(_) => Value::String("Failed to read response text".to_string()),
        };

        Self::Upstream {
            status: status.as_u16(),
            status_text,
            body,
        }
    }

    /// Short machine-readable kind, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Upstream { .. } => "upstream_error",
            Self::Unreachable(_) => "upstream_unreachable",
            Self::Setup(_) => "request_setup",
            Self::InvalidResponse(_) => "invalid_response",
            Self::DeadlineExceeded { .. } => "poll_deadline_exceeded",
            Self::AttemptsExhausted { .. } => "poll_attempts_exhausted",
            Self::Cancelled => "cancelled",
        }
    }

    /// Value returned to clients in the `details` field
    pub fn details(&self) -> Value {
        match self {
            Self::Upstream { body, .. } => body.clone(),
            Self::Unreachable(detail) | Self::Setup(detail) | Self::InvalidResponse(detail) => {
                Value::String(detail.clone())
            }
            Self::DeadlineExceeded { elapsed } => Value::String(format!(
                "Submission still pending after {:.1}s",
                elapsed.as_secs_f64()
            )),
            Self::AttemptsExhausted { attempts } => Value::String(format!(
                "Submission still pending after {} status checks",
                attempts
            )),
            Self::Cancelled => Value::String("The server stopped polling this submission".into()),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::Setup(err.to_string())
        } else if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::Unreachable(err.to_string())
        }
    }
}
