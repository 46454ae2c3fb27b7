use std::path::Path;

use crate::domain::context::CONTROL_DIR;

/// Whether `work_dir` is the root of a git project.
///
/// Only `work_dir/.git` is checked; parent directories are never searched.
/// Any filesystem anomaly (permission denied, broken link) reads as `false`.
pub fn is_version_controlled(work_dir: &Path) -> bool {
    std::fs::metadata(work_dir.join(CONTROL_DIR))
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}
