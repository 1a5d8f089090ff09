/*
 * Responsibility
 * - Read-only access to the data directory (reports, users)
 */
pub mod error;
pub mod report_repo;
pub mod user_repo;
