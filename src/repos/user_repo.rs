/*
 * Responsibility
 * - Loading the users.json collection (opaque records, order preserved)
 * - Filtering by the `active` boolean field
 */
use std::path::Path;

use serde_json::Value;

use crate::repos::error::RepoError;

const USERS_FILE: &str = "users.json";

/// Load the full user collection in file order.
///
/// A missing or malformed users.json is a data-directory fault, not a
/// client error.
pub async fn load(data_dir: &Path) -> Result<Vec<Value>, RepoError> {
    let text = tokio::fs::read_to_string(data_dir.join(USERS_FILE)).await?;
    let users: Vec<Value> = serde_json::from_str(&text)?;
    Ok(users)
}

/// Keep records whose `active` field is a JSON boolean equal to `active`.
///
/// Records without a boolean `active` field match neither filter.
pub fn filter_by_active(users: Vec<Value>, active: bool) -> Vec<Value> {
    users
        .into_iter()
        .filter(|user| user.get("active").and_then(Value::as_bool) == Some(active))
        .collect()
}
