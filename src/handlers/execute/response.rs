//! Execution response DTOs

use serde::Serialize;

use crate::execution::{ExecutionReport, Verdict};
use crate::judge0::SubmissionStatus;

/// Body of a completed `POST /execute`.
///
/// Optional fields are omitted, which yields the three shapes clients rely
/// on: console output, test comparison, or categorized failure.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteResponse {
    pub status: SubmissionStatus,
    pub time: f64,
    pub memory: u64,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_tests_passed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl From<ExecutionReport> for ExecuteResponse {
    fn from(report: ExecutionReport) -> Self {
        let all_tests_passed = report.verdict.all_tests_passed();
        let (actual_output, expected_output, error_message) = match report.verdict {
            Verdict::ConsoleOutput { actual_output } => (Some(actual_output), None, None),
            Verdict::TestPassed {
                actual_output,
                expected_output,
            }
            | Verdict::TestFailed {
                actual_output,
                expected_output,
            } => (Some(actual_output), Some(expected_output), None),
            Verdict::Failed(failure) => (None, None, Some(failure.to_string())),
        };

        Self {
            status: report.status,
            time: report.time,
            memory: report.memory,
            stdout: report.stdout,
            stderr: report.stderr,
            all_tests_passed,
            actual_output,
            expected_output,
            error_message,
        }
    }
}
