//! Interpretation of terminal Judge0 results

use std::fmt;

use crate::judge0::{encoding, StatusKind, SubmissionResult, SubmissionStatus};
use crate::models::ExecutionRequest;

const NO_OUTPUT: &str = "(no output)";
const GENERIC_FAILURE: &str = "Execution failed";

/// Normalized outcome of one execution
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionReport {
    pub status: SubmissionStatus,
    pub time: f64,
    pub memory: u64,
    /// Raw base64 as returned upstream
    pub stdout: Option<String>,
    /// Raw base64 as returned upstream
    pub stderr: Option<String>,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    ConsoleOutput {
        actual_output: String,
    },
    TestPassed {
        actual_output: String,
        expected_output: String,
    },
    TestFailed {
        actual_output: String,
        expected_output: String,
    },
    Failed(ExecutionFailure),
}

impl Verdict {
    /// `None` for console runs, which make no correctness claim
    pub fn all_tests_passed(&self) -> Option<bool> {
        match self {
            Self::ConsoleOutput { .. } => None,
            Self::TestPassed { .. } => Some(true),
            Self::TestFailed { .. } | Self::Failed(_) => Some(false),
        }
    }
}

/// Non-accepted verdict reported by Judge0
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionFailure {
    WrongAnswer {
        expected: String,
        got: Option<String>,
    },
    TimeLimitExceeded,
    CompilationError {
        detail: String,
    },
    RuntimeError {
        detail: String,
    },
    MemoryLimitExceeded,
    Unclassified {
        status_id: u32,
        detail: String,
    },
}

impl fmt::Display for ExecutionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongAnswer { expected, got } => write!(
                f,
                "Wrong Answer: Your output doesn't match the expected result.\n\nExpected: {}\nGot: {}",
                expected,
                got.as_deref().unwrap_or(NO_OUTPUT)
            ),
            Self::TimeLimitExceeded => {
                f.write_str("Time Limit Exceeded: Your code took too long to execute.")
            }
            Self::CompilationError { detail } => write!(f, "Compilation Error:\n{}", detail),
            Self::RuntimeError { detail } => write!(f, "Runtime Error:\n{}", detail),
            Self::MemoryLimitExceeded => {
                f.write_str("Memory Limit Exceeded: Your code used too much memory.")
            }
            Self::Unclassified { status_id, detail } => {
                write!(f, "Execution Error (Status {}): {}", status_id, detail)
            }
        }
    }
}

/// Map a terminal result onto a verdict. Branches only on the status id.
pub fn interpret(request: &ExecutionRequest, result: &SubmissionResult) -> ExecutionReport {
    let verdict = match result.status.kind() {
        StatusKind::Accepted => {
            let actual_output = decoded_output(result.stdout.as_deref()).unwrap_or_default();
            match &request.test_case {
                None => Verdict::ConsoleOutput { actual_output },
                Some(test_case) if actual_output == test_case.expected_output => Verdict::TestPassed {
                    actual_output,
                    expected_output: test_case.expected_output.clone(),
                },
                Some(test_case) => Verdict::TestFailed {
                    actual_output,
                    expected_output: test_case.expected_output.clone(),
                },
            }
        }
        kind => Verdict::Failed(classify_failure(kind, request, result)),
    };

    ExecutionReport {
        status: result.status.clone(),
        time: result.time.unwrap_or(0.0),
        memory: result.memory.unwrap_or(0),
        stdout: result.stdout.clone(),
        stderr: result.stderr.clone(),
        verdict,
    }
}

fn classify_failure(
    kind: StatusKind,
    request: &ExecutionRequest,
    result: &SubmissionResult,
) -> ExecutionFailure {
    match kind {
        StatusKind::WrongAnswer => ExecutionFailure::WrongAnswer {
            expected: request.expected_output().to_string(),
            // An empty stdout reads as no output at all
            got: non_empty_decoded(result.stdout.as_deref()).map(|out| out.trim_end().to_string()),
        },
        StatusKind::TimeLimitExceeded => ExecutionFailure::TimeLimitExceeded,
        StatusKind::CompilationError => ExecutionFailure::CompilationError {
            detail: failure_detail(result),
        },
        StatusKind::RuntimeError => ExecutionFailure::RuntimeError {
            detail: failure_detail(result),
        },
        StatusKind::MemoryLimitExceeded => ExecutionFailure::MemoryLimitExceeded,
        _ => ExecutionFailure::Unclassified {
            status_id: result.status.id,
            detail: failure_detail(result),
        },
    }
}

/// stderr, then the status description
fn failure_detail(result: &SubmissionResult) -> String {
    non_empty_decoded(result.stderr.as_deref())
        .or_else(|| Some(result.status.description.clone()).filter(|d| !d.is_empty()))
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

fn non_empty_decoded(field: Option<&str>) -> Option<String> {
    field
        .filter(|encoded| !encoded.is_empty())
        .map(encoding::decode_lossy)
}

/// Decoded program output with trailing whitespace removed
fn decoded_output(stdout: Option<&str>) -> Option<String> {
    stdout.map(|encoded| encoding::decode_lossy(encoded).trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judge0::encoding::encode;
    use crate::models::{Language, TestCase};

    fn test_run(expected: &str) -> ExecutionRequest {
        ExecutionRequest::new(
            Language::Python,
            "code".into(),
            vec![TestCase {
                input: "[3,4,-1,1]".into(),
                expected_output: expected.into(),
            }],
        )
    }

    fn console_run() -> ExecutionRequest {
        ExecutionRequest::new(Language::Python, "print('hello')".into(), vec![])
    }

    fn result(id: u32, description: &str, stdout: Option<&str>, stderr: Option<&str>) -> SubmissionResult {
        let mut result = SubmissionResult::with_status(SubmissionStatus::new(id, description));
        result.stdout = stdout.map(encode);
        result.stderr = stderr.map(encode);
        result
    }

    fn failure(report: &ExecutionReport) -> &ExecutionFailure {
        match &report.verdict {
            Verdict::Failed(failure) => failure,
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_accepted_matching_output_passes() {
        let report = interpret(&test_run("2"), &result(3, "Accepted", Some("2\n"), None));
        assert_eq!(
            report.verdict,
            Verdict::TestPassed {
                actual_output: "2".into(),
                expected_output: "2".into()
            }
        );
        assert_eq!(report.verdict.all_tests_passed(), Some(true));
    }

    #[test]
    fn test_accepted_mismatch_fails() {
        let report = interpret(&test_run("2"), &result(3, "Accepted", Some("3"), None));
        assert_eq!(
            report.verdict,
            Verdict::TestFailed {
                actual_output: "3".into(),
                expected_output: "2".into()
            }
        );
        assert_eq!(report.verdict.all_tests_passed(), Some(false));
    }

    #[test]
    fn test_comparison_is_exact_after_trim() {
        let report = interpret(&test_run("2"), &result(3, "Accepted", Some("2.0\n"), None));
        assert_eq!(report.verdict.all_tests_passed(), Some(false));

        let report = interpret(&test_run("2"), &result(3, "Accepted", Some(" 2\n"), None));
        assert_eq!(report.verdict.all_tests_passed(), Some(false));
    }

    #[test]
    fn test_console_run_returns_output_only() {
        let report = interpret(&console_run(), &result(3, "Accepted", Some("hello\n"), None));
        assert_eq!(
            report.verdict,
            Verdict::ConsoleOutput {
                actual_output: "hello".into()
            }
        );
        assert_eq!(report.verdict.all_tests_passed(), None);
    }

    #[test]
    fn test_accepted_without_stdout_is_empty_output() {
        let report = interpret(&console_run(), &result(3, "Accepted", None, None));
        assert_eq!(
            report.verdict,
            Verdict::ConsoleOutput {
                actual_output: String::new()
            }
        );
    }

    #[test]
    fn test_numbers_default_to_zero() {
        let report = interpret(&console_run(), &result(3, "Accepted", Some("x"), None));
        assert_eq!(report.time, 0.0);
        assert_eq!(report.memory, 0);

        let mut timed = result(3, "Accepted", Some("x"), None);
        timed.time = Some(0.25);
        timed.memory = Some(4096);
        let report = interpret(&console_run(), &timed);
        assert_eq!(report.time, 0.25);
        assert_eq!(report.memory, 4096);
    }

    #[test]
    fn test_wrong_answer_compares_expected_and_got() {
        let report = interpret(&test_run("2"), &result(4, "Wrong Answer", Some("3\n"), Some("ignored")));
        let failure = failure(&report);
        assert_eq!(
            failure,
            &ExecutionFailure::WrongAnswer {
                expected: "2".into(),
                got: Some("3".into())
            }
        );
        let message = failure.to_string();
        assert!(message.contains("Expected: 2"));
        assert!(message.contains("Got: 3"));
    }

    #[test]
    fn test_wrong_answer_without_output() {
        let report = interpret(&test_run("2"), &result(4, "Wrong Answer", None, None));
        assert!(failure(&report).to_string().ends_with("Got: (no output)"));

        let report = interpret(&test_run("2"), &result(4, "Wrong Answer", Some(""), None));
        assert_eq!(
            failure(&report),
            &ExecutionFailure::WrongAnswer {
                expected: "2".into(),
                got: None,
            }
        );
        assert!(failure(&report).to_string().ends_with("Got: (no output)"));
    }

    #[test]
    fn test_compilation_error_prefix() {
        let report = interpret(&test_run("2"), &result(6, "Compilation Error", None, Some("SyntaxError")));
        assert_eq!(
            failure(&report),
            &ExecutionFailure::CompilationError {
                detail: "SyntaxError".into()
            }
        );
        assert_eq!(failure(&report).to_string(), "Compilation Error:\nSyntaxError");
    }

    #[test]
    fn test_description_used_when_stderr_missing() {
        let mut compiled = result(6, "Compilation Error", None, None);
        compiled.compile_output = Some(encode("main.cpp:1: error"));
        let report = interpret(&test_run("2"), &compiled);
        assert_eq!(failure(&report).to_string(), "Compilation Error:\nCompilation Error");
    }

    #[test]
    fn test_runtime_error_falls_back_to_description() {
        let report = interpret(&test_run("2"), &result(7, "Runtime Error (NZEC)", None, None));
        assert_eq!(failure(&report).to_string(), "Runtime Error:\nRuntime Error (NZEC)");

        let report = interpret(&test_run("2"), &result(7, "Runtime Error (NZEC)", None, Some("")));
        assert_eq!(failure(&report).to_string(), "Runtime Error:\nRuntime Error (NZEC)");
    }

    #[test]
    fn test_limits_ignore_stderr() {
        let report = interpret(&test_run("2"), &result(5, "Time Limit Exceeded", None, Some("killed")));
        assert_eq!(failure(&report), &ExecutionFailure::TimeLimitExceeded);
        assert_eq!(
            failure(&report).to_string(),
            "Time Limit Exceeded: Your code took too long to execute."
        );

        let report = interpret(&test_run("2"), &result(8, "Memory Limit Exceeded", None, Some("oom")));
        assert_eq!(failure(&report), &ExecutionFailure::MemoryLimitExceeded);
        assert_eq!(
            failure(&report).to_string(),
            "Memory Limit Exceeded: Your code used too much memory."
        );
    }

    #[test]
    fn test_unclassified_status() {
        let report = interpret(&console_run(), &result(13, "Internal Error", None, None));
        assert_eq!(
            failure(&report).to_string(),
            "Execution Error (Status 13): Internal Error"
        );
        assert_eq!(report.verdict.all_tests_passed(), Some(false));

        let report = interpret(&console_run(), &result(11, "", None, None));
        assert_eq!(
            failure(&report).to_string(),
            "Execution Error (Status 11): Execution failed"
        );
    }

    #[test]
    fn test_interpretation_is_deterministic() {
        let request = test_run("2");
        for id in 3..=12 {
            let raw = result(id, "desc", Some("out"), Some("err"));
            assert_eq!(interpret(&request, &raw), interpret(&request, &raw));
        }
    }

    #[test]
    fn test_raw_fields_pass_through() {
        let raw = result(7, "Runtime Error", Some("partial"), Some("boom"));
        let report = interpret(&test_run("2"), &raw);
        assert_eq!(report.stdout, raw.stdout);
        assert_eq!(report.stderr, raw.stderr);
        assert_eq!(report.status, SubmissionStatus::new(7, "Runtime Error"));
    }
}
