use axum::extract::{Path, State};
use axum::{Json, http::StatusCode};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::results::model::{CreateResultDto, ExamResult};
use crate::modules::results::service::ResultService;
use crate::modules::users::controller::MessageResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Record an exam result for an account
#[utoipa::path(
    post,
    path = "/api/results",
    request_body = CreateResultDto,
    responses(
        (status = 201, description = "Result created", body = MessageResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Results"
)]
#[instrument(skip(state, dto))]
pub async fn create_result(
    State(state): State<AppState>,
    Json(dto): Json<CreateResultDto>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    ResultService::create_result(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Result created successfully".to_string(),
        }),
    ))
}

/// List all exam results
#[utoipa::path(
    get,
    path = "/api/results",
    responses(
        (status = 200, description = "All results", body = Vec<ExamResult>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Results"
)]
#[instrument(skip(state))]
pub async fn get_results(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExamResult>>, AppError> {
    let results = ResultService::get_results(&state.db).await?;
    Ok(Json(results))
}

/// Get an exam result by its own id (empty array when absent)
#[utoipa::path(
    get,
    path = "/api/results/{id}",
    params(("id" = Uuid, Path, description = "Result id")),
    responses(
        (status = 200, description = "Matching results, possibly empty", body = Vec<ExamResult>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Results"
)]
#[instrument(skip(state))]
pub async fn get_result_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ExamResult>>, AppError> {
    let results = ResultService::get_result_by_id(&state.db, id).await?;
    Ok(Json(results))
}
