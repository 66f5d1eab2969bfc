// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Creates `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> AppResult<()> {
    fs::create_dir_all(dir).map_err(|e| AppError::file_access(dir, e))?;
    debug!(dir = %dir.display(), "output directory ready");
    Ok(())
}
