//! Execution request model

use serde::Deserialize;

use super::Language;

/// Input/expected-output pair supplied with a test run
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub expected_output: String,
}

/// A single execution, owned by one inbound request
#[derive(Debug, Clone)]
pub struct ExecutionRequest {
    pub language: Language,
    pub code: String,
    /// `None` for console runs
    pub test_case: Option<TestCase>,
}

impl ExecutionRequest {
    /// Build a request from the client's ordered test cases.
    ///
    /// Only the first case is honored; an empty list makes this a console run.
    pub fn new(language: Language, code: String, test_cases: Vec<TestCase>) -> Self {
        let supplied = test_cases.len();
        let test_case = test_cases.into_iter().next();

        if supplied > 1 {
            tracing::debug!(
                supplied,
                ignored = supplied - 1,
                "Only the first test case is executed"
            );
        }

        Self {
            language,
            code,
            test_case,
        }
    }

    pub fn is_console_run(&self) -> bool {
        self.test_case.is_none()
    }

    /// Expected output of the executed test case (empty for console runs)
    pub fn expected_output(&self) -> &str {
        self.test_case
            .as_ref()
            .map_or("", |tc| tc.expected_output.as_str())
    }
}
