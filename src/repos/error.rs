/*
 * Responsibility
 * - Repo-level error type
 * - Keeps the data-directory fault taxonomy in one place so AppError
 *   conversion stays trivial
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}
