//! Judge0 wire types

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::constants::status_ids;

/// Status object reported by Judge0
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionStatus {
    pub id: u32,
    #[serde(default)]
    pub description: String,
}

impl SubmissionStatus {
    pub fn new(id: u32, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
        }
    }

    pub fn kind(&self) -> StatusKind {
        StatusKind::from_id(self.id)
    }
}

/// Classified Judge0 status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    InQueue,
    Processing,
    Accepted,
    WrongAnswer,
    TimeLimitExceeded,
    CompilationError,
    RuntimeError,
    MemoryLimitExceeded,
    Unclassified(u32),
}

impl StatusKind {
    pub fn from_id(id: u32) -> Self {
        match id {
            status_ids::IN_QUEUE => Self::InQueue,
            status_ids::PROCESSING => Self::Processing,
            status_ids::ACCEPTED => Self::Accepted,
            status_ids::WRONG_ANSWER => Self::WrongAnswer,
            status_ids::TIME_LIMIT_EXCEEDED => Self::TimeLimitExceeded,
            status_ids::COMPILATION_ERROR => Self::CompilationError,
            status_ids::RUNTIME_ERROR => Self::RuntimeError,
            status_ids::MEMORY_LIMIT_EXCEEDED => Self::MemoryLimitExceeded,
            other => Self::Unclassified(other),
        }
    }

    /// Anything but queued/processing ends the poll loop
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::InQueue | Self::Processing)
    }
}

/// Body of `POST /submissions`
#[derive(Debug, Clone, Serialize)]
pub struct CreateSubmission {
    pub language_id: u32,
    pub source_code: String,
    pub stdin: String,
}

/// Answer to `POST /submissions?wait=false`
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionToken {
    pub token: String,
}

/// Answer to `GET /submissions/{token}?fields=*`
///
/// Text fields stay base64-encoded exactly as Judge0 sent them.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionResult {
    #[serde(default)]
    pub token: Option<String>,
    pub status: SubmissionStatus,
    #[serde(default)]
    pub stdout: Option<String>,
    #[serde(default)]
    pub stderr: Option<String>,
    #[serde(default)]
    pub compile_output: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Seconds; Judge0 reports this as a decimal string
    #[serde(default, deserialize_with = "lenient_f64")]
    pub time: Option<f64>,
    /// Kilobytes
    #[serde(default, deserialize_with = "lenient_u64")]
    pub memory: Option<u64>,
}

impl SubmissionResult {
    /// Result carrying nothing but a status, handy for building fixtures
    pub fn with_status(status: SubmissionStatus) -> Self {
        Self {
            token: None,
            status,
            stdout: None,
            stderr: None,
            compile_output: None,
            message: None,
            time: None,
            memory: None,
        }
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|v| *v >= 0.0).map(|v| v.round() as u64)),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(StatusKind::from_id(1), StatusKind::InQueue);
        assert_eq!(StatusKind::from_id(2), StatusKind::Processing);
        assert_eq!(StatusKind::from_id(3), StatusKind::Accepted);
        assert_eq!(StatusKind::from_id(8), StatusKind::MemoryLimitExceeded);
        assert_eq!(StatusKind::from_id(11), StatusKind::Unclassified(11));
        assert_eq!(StatusKind::from_id(0), StatusKind::Unclassified(0));
    }

    #[test]
    fn test_terminal_states() {
        assert!(!StatusKind::InQueue.is_terminal());
        assert!(!StatusKind::Processing.is_terminal());
        for id in 3..=14 {
            assert!(StatusKind::from_id(id).is_terminal(), "status {id}");
        }
    }

    #[test]
    fn test_result_parses_judge0_payload() {
        let raw = r#"{
            "token": "d85cd024-1548-4165-96c7-7bc88673f194",
            "status": {"id": 3, "description": "Accepted"},
            "stdout": "Mgo=\n",
            "stderr": null,
            "compile_output": null,
            "message": null,
            "time": "0.017",
            "memory": 3148
        }"#;
        let result: SubmissionResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.status, SubmissionStatus::new(3, "Accepted"));
        assert_eq!(result.stdout.as_deref(), Some("Mgo=\n"));
        assert_eq!(result.stderr, None);
        assert_eq!(result.time, Some(0.017));
        assert_eq!(result.memory, Some(3148));
    }

    #[test]
    fn test_result_tolerates_missing_and_odd_numbers() {
        let raw = r#"{"status": {"id": 1, "description": "In Queue"}, "time": null, "memory": "12"}"#;
        let result: SubmissionResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.time, None);
        assert_eq!(result.memory, Some(12));

        let raw = r#"{"status": {"id": 2}, "time": 0.5, "memory": 10.4}"#;
        let result: SubmissionResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.status.description, "");
        assert_eq!(result.time, Some(0.5));
        assert_eq!(result.memory, Some(10));
    }

    #[test]
    fn test_result_requires_status() {
        assert!(serde_json::from_str::<SubmissionResult>(r#"{"stdout": null}"#).is_err());
    }
}
