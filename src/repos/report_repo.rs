/*
 * Responsibility
 * - Report filename resolution (`datacredito_<person_id>[_*].json`)
 * - Loading a resolved report as opaque JSON
 * - Never writes; the data directory is read-only to this service
 */
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::repos::error::RepoError;

/// Resolve the report file for a person id.
///
/// Resolution order:
/// 1. exact match `datacredito_<person_id>.json`
/// 2. lexicographically first of `datacredito_<person_id>_*.json`
///
/// Returns `None` when nothing matches (including an absent data
/// directory, which lists as empty).
pub async fn resolve(data_dir: &Path, person_id: &str) -> Option<PathBuf> {
    let exact = data_dir.join(format!("datacredito_{person_id}.json"));
    if tokio::fs::metadata(&exact)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
    {
        return Some(exact);
    }

    // The trailing underscore keeps id 42 from matching files for id 421.
    let prefix = format!("datacredito_{person_id}_");

    let mut candidates: Vec<String> = Vec::new();
    let mut entries = tokio::fs::read_dir(data_dir).await.ok()?;
    while let Some(entry) = entries.next_entry().await.ok().flatten() {
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if name.starts_with(&prefix) && name.ends_with(".json") {
            candidates.push(name.to_string());
        }
    }

    if candidates.is_empty() {
        return None;
    }

    candidates.sort();
    if candidates.len() > 1 {
        // Multiple suffixed files for one id usually means the generator
        // left stale output behind; we still serve the first sorted one.
        tracing::warn!(
            person_id,
            count = candidates.len(),
            chosen = %candidates[0],
            "multiple report files match id"
        );
    }

    Some(data_dir.join(&candidates[0]))
}

/// Load the report for a person id as an opaque JSON value.
///
/// `Ok(None)` means no file matched. A matched file that cannot be read
/// or parsed is a data-directory fault and surfaces as `RepoError`.
pub async fn load(data_dir: &Path, person_id: &str) -> Result<Option<Value>, RepoError> {
    let Some(path) = resolve(data_dir, person_id).await else {
        return Ok(None);
    };

    let text = tokio::fs::read_to_string(&path).await?;
    let value: Value = serde_json::from_str(&text)?;
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_report(dir: &TempDir, name: &str, body: &str) {
        std::fs::write(dir.path().join(name), body).unwrap();
    }

    #[tokio::test]
    async fn exact_match_wins_over_suffixed_files() {
        let dir = TempDir::new().unwrap();
        write_report(&dir, "datacredito_42.json", r#"{"kind":"exact"}"#);
        write_report(&dir, "datacredito_42_a.json", r#"{"kind":"suffixed"}"#);

        let value = load(dir.path(), "42").await.unwrap().unwrap();
        assert_eq!(value, json!({"kind": "exact"}));
    }

    #[tokio::test]
    async fn suffixed_files_resolve_to_first_sorted() {
        let dir = TempDir::new().unwrap();
        write_report(&dir, "datacredito_42_b.json", r#"{"kind":"b"}"#);
        write_report(&dir, "datacredito_42_a.json", r#"{"kind":"a"}"#);

        let path = resolve(dir.path(), "42").await.unwrap();
        assert_eq!(path.file_name().unwrap(), "datacredito_42_a.json");
    }

    #[tokio::test]
    async fn longer_ids_are_not_suffix_matches() {
        let dir = TempDir::new().unwrap();
        write_report(&dir, "datacredito_421.json", "{}");
        write_report(&dir, "datacredito_421_x.json", "{}");

        assert!(resolve(dir.path(), "42").await.is_none());
    }

    #[tokio::test]
    async fn no_match_is_none_not_error() {
        let dir = TempDir::new().unwrap();
        assert!(load(dir.path(), "missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn missing_data_dir_lists_as_empty() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("nope");
        assert!(resolve(&gone, "42").await.is_none());
    }

    #[tokio::test]
    async fn malformed_report_is_a_repo_error() {
        let dir = TempDir::new().unwrap();
        write_report(&dir, "datacredito_42.json", "not json");

        let err = load(dir.path(), "42").await.unwrap_err();
        assert!(matches!(err, RepoError::Json(_)));
    }
}
