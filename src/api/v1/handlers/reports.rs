/*
 * Responsibility
 * - GET /reports/{person_id} handler
 * - Path extractor -> repo resolution -> verbatim JSON passthrough
 * - 404 carries the requested id; data faults stay generic 500s
 */
use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;

use crate::{error::AppError, repos::report_repo, state::AppState};

pub async fn get_report(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let report = report_repo::load(state.data_dir(), &person_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, person_id, "failed to load report");
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::report_not_found(&person_id))?;

    Ok(Json(report))
}
