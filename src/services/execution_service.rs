//! Execution service

use crate::{
    execution::{harness, interpret, poll_until_terminal, CancelSignal, ExecutionReport, PollPolicy},
    judge0::{ExecutionBackend, TransportError},
    models::ExecutionRequest,
};

/// Execution service for business logic
pub struct ExecutionService;

impl ExecutionService {
    /// Run one request end to end: harness, submit, poll, interpret.
    ///
    /// Network calls are strictly sequential; the token never outlives this call.
    pub async fn execute(
        backend: &dyn ExecutionBackend,
        policy: &PollPolicy,
        cancel: CancelSignal,
        request: &ExecutionRequest,
    ) -> Result<ExecutionReport, TransportError> {
        let final_code = harness::build(
            request.language,
            &request.code,
            request.test_case.as_ref(),
            request.is_console_run(),
        );

        tracing::info!(
            language = %request.language,
            language_id = request.language.judge0_id(),
            code_length = request.code.len(),
            harnessed = final_code.len() != request.code.len(),
            console_run = request.is_console_run(),
            "Sending code to Judge0"
        );

        let token = backend
            .submit(request.language.judge0_id(), &final_code)
            .await?;
        let result = poll_until_terminal(backend, &token, policy, cancel).await?;
        let report = interpret(request, &result);

        tracing::info!(
            token = %token,
            status_id = report.status.id,
            all_tests_passed = ?report.verdict.all_tests_passed(),
            "Execution finished"
        );

        Ok(report)
    }

    /// Ask Judge0 for its language list; returns how many it supports
    pub async fn check_upstream(backend: &dyn ExecutionBackend) -> Result<usize, TransportError> {
        tracing::info!("Testing Judge0 API connection...");
        let languages = backend.list_languages().await?;
        tracing::info!(count = languages.len(), "Judge0 API test successful");
        Ok(languages.len())
    }
}
