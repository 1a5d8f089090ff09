/*
 * Responsibility
 * - Shared context bound to the Router (AppState)
 *   - ex: data_dir: the read-only report/user directory
 * - Held by Clone (internals are Arc/Clone cheap)
 */
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AppState {
    data_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir: Arc::new(data_dir),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
