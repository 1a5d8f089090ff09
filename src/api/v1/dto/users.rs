/*
 * Responsibility
 * - Users query DTO
 * - Explicit parsing of the `active` flag (no permissive truthiness)
 */
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub active: Option<String>,
}

impl ListUsersQuery {
    /// Map the raw `active` value to a filter.
    ///
    /// - unset -> `None` (no filter)
    /// - `true` / `1` / `yes` -> `Some(true)`
    /// - `false` / `0` / `no` / empty -> `Some(false)`
    /// - anything else -> error (no truthy coercion of arbitrary strings)
    ///
    /// Matching is case-insensitive.
    pub fn active_filter(&self) -> Result<Option<bool>, &'static str> {
        let Some(raw) = &self.active else {
            return Ok(None);
        };

        match raw.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(Some(true)),
            "false" | "0" | "no" | "" => Ok(Some(false)),
            _ => Err("active must be one of: true, 1, yes, false, 0, no"),
        }
    }
}
