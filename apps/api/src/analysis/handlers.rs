//! Axum route handler for the analysis API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use crate::analysis::analyzer::{analyze_job_description, JobAnalysis};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeJobRequest {
    pub job_description: Option<String>,
}

/// POST /api/analyze-job
///
/// Every failure, including an empty description, answers 500.
pub async fn handle_analyze_job(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeJobRequest>, JsonRejection>,
) -> Result<Json<JobAnalysis>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Analysis(e.body_text()))?;
    let description = request.job_description.unwrap_or_default();

    let analysis = analyze_job_description(&description, state.analyzer.as_ref()).await?;
    Ok(Json(analysis))
}
