use std::path::PathBuf;

/// Errors raised by the installer and the session logger.
///
/// The [`crate::setup`] facade discards every variant; they exist so the
/// individual components can be inspected in tests and by the CLI.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("cannot determine working directory: {0}")]
    WorkingDir(#[source] std::io::Error),
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to inspect hook {path}: {source}")]
    InspectHook {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write hook {path}: {source}")]
    WriteHook {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write setup log {path}: {source}")]
    WriteLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Create `path` and any missing parents, tolerating an existing directory.
pub(crate) fn ensure_dir(path: &std::path::Path) -> Result<(), SetupError> {
    std::fs::create_dir_all(path).map_err(|source| SetupError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}
