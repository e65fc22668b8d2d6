//! Log file retention
//!
//! Each write prunes the same category's file from exactly one year earlier.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use super::paths;

/// Delete the category's log file from one year before `today`
///
/// Returns whether a file was removed. A missing target is not an error, and
/// neither is losing the delete race to another process. Anything at the path
/// that is not a regular file is left alone.
pub fn remove_previous_year_log(root: &Path, category: &str, today: NaiveDate) -> Result<bool> {
    let target = paths::previous_year_log_path(root, category, today);

    match fs::symlink_metadata(&target) {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return Ok(false),
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to stat old log file {}", target.display()))
        }
    }

    match fs::remove_file(&target) {
        Ok(()) => {
            tracing::debug!("Removed year-old log file {}", target.display());
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => {
            Err(e).with_context(|| format!("Failed to remove old log file {}", target.display()))
        }
    }
}
