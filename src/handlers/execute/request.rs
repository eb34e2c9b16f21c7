//! Execution request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::models::{ExecutionRequest, Language, TestCase};

/// Body of `POST /execute`
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteRequest {
    /// Language name, matched case-insensitively
    #[validate(length(min = 1, max = 20))]
    pub language: String,

    /// Source code
    #[validate(length(min = 1, max = 1048576))] // 1MB max
    pub code: String,

    /// Only the first case is executed; empty means console run
    #[serde(default)]
    pub test_cases: Vec<TestCase>,
}

impl ExecuteRequest {
    pub fn into_execution_request(self, language: Language) -> ExecutionRequest {
        ExecutionRequest::new(language, self.code, self.test_cases)
    }
}
