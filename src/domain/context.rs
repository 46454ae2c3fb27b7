use std::path::{Path, PathBuf};

/// Name of the control-metadata directory marking a git project.
pub const CONTROL_DIR: &str = ".git";
/// Hook file name git runs before recording a commit.
pub const HOOK_NAME: &str = "pre-commit";
/// Log file name written by the session logger.
pub const LOG_FILE: &str = "setup.log";
/// Log directory used when the working directory is not a git project.
pub const FALLBACK_LOG_DIR: &str = "results";

/// Where a working directory's artifacts live.
///
/// Derived fresh from the filesystem on every call to [`RepositoryContext::probe`];
/// never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryContext {
    pub work_dir: PathBuf,
    pub version_controlled: bool,
}

impl RepositoryContext {
    pub fn probe(work_dir: &Path) -> Self {
        RepositoryContext {
            work_dir: work_dir.to_path_buf(),
            version_controlled: crate::probe::is_version_controlled(work_dir),
        }
    }

    /// `<work_dir>/.git/hooks`, regardless of whether it exists.
    pub fn hooks_dir(&self) -> PathBuf {
        self.work_dir.join(CONTROL_DIR).join("hooks")
    }

    /// The pre-commit hook path, or `None` outside a git project.
    pub fn hook_path(&self) -> Option<PathBuf> {
        self.version_controlled.then(|| self.hooks_dir().join(HOOK_NAME))
    }

    /// Directory receiving `setup.log`.
    ///
    /// `.git/hooks/logs` inside a git project, `results` otherwise.
    pub fn log_dir(&self) -> PathBuf {
        if self.version_controlled {
            self.hooks_dir().join("logs")
        } else {
            self.work_dir.join(FALLBACK_LOG_DIR)
        }
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_dir().join(LOG_FILE)
    }
}
