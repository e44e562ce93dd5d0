//! Axum route handlers for the Jobs API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::errors::AppError;
use crate::jobs::validation::JobInput;
use crate::models::job::JobRecord;
use crate::state::AppState;

/// GET /api/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobRecord>>, AppError> {
    Ok(Json(state.jobs.list().await?))
}

/// POST /api/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    payload: Result<Json<JobInput>, JsonRejection>,
) -> Result<(StatusCode, Json<JobRecord>), AppError> {
    let Json(input) = payload?;
    let job = state.jobs.create(input).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// PUT /api/jobs/:id
///
/// Full replacement of title, company, link and status.
pub async fn handle_update_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<JobInput>, JsonRejection>,
) -> Result<Json<JobRecord>, AppError> {
    let Json(input) = payload?;
    Ok(Json(state.jobs.update(&id, input).await?))
}

/// DELETE /api/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.jobs.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
