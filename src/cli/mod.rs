pub mod setup;
pub mod status;

use std::path::{Path, PathBuf};

use crate::error::SetupError;

/// Resolve `--dir`, defaulting to the process working directory.
pub(crate) fn work_dir(dir: Option<&Path>) -> Result<PathBuf, SetupError> {
    match dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => std::env::current_dir().map_err(SetupError::WorkingDir),
    }
}
