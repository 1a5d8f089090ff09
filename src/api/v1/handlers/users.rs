/*
 * Responsibility
 * - GET /v1/users handler
 * - Query extractor -> DTO parse -> repo call
 * - Records stay opaque; no reshaping of user objects
 */
use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::Value;

use crate::{
    api::v1::dto::users::ListUsersQuery,
    error::AppError,
    repos::user_repo,
    state::AppState,
};

pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<Vec<Value>>, AppError> {
    let active = query
        .active_filter()
        .map_err(|msg| AppError::bad_request("INVALID_ACTIVE", msg))?;

    let users = user_repo::load(state.data_dir()).await.map_err(|e| {
        tracing::error!(error = %e, "failed to load users.json");
        AppError::from(e)
    })?;

    let users = match active {
        Some(flag) => user_repo::filter_by_active(users, flag),
        None => users,
    };

    Ok(Json(users))
}
