//! Execution handler implementations

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::Language,
    services::ExecutionService,
    state::AppState,
};

use super::{request::ExecuteRequest, response::ExecuteResponse};

/// Run submitted code on Judge0 and return the normalized verdict
pub async fn execute_code(
    State(state): State<AppState>,
    payload: Result<Json<ExecuteRequest>, JsonRejection>,
) -> AppResult<Json<ExecuteResponse>> {
    let Json(payload) = payload?;
    let Some(language) = Language::from_name(&payload.language) else {
        tracing::warn!(language = %payload.language, "Unsupported language");
        return Err(AppError::UnsupportedLanguage);
    };
    payload.validate()?;

    let request = payload.into_execution_request(language);
    let report = ExecutionService::execute(
        state.backend(),
        state.poll_policy(),
        state.cancel_signal(),
        &request,
    )
    .await?;

    Ok(Json(report.into()))
}
