/*
 * Responsibility
 * - v1 URL structure
 * - /health, /users
 * - /reports lives outside the version prefix (see app::build_router)
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::v1::handlers::{health::health, users::list_users};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/users", get(list_users))
}
