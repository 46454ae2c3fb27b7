//! Idempotent pre-commit hook installation.
//!
//! The installer writes `.git/hooks/pre-commit` only when nothing exists at
//! that path. An existing file, whatever its content, is never modified.

pub mod template;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::domain::RepositoryContext;
use crate::error::{ensure_dir, SetupError};

pub use template::HookTemplate;

/// Which branch the installer took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    /// The working directory has no `.git` directory; nothing was touched.
    NotARepository,
    /// A file already existed at the hook path and was left alone.
    AlreadyPresent(PathBuf),
    /// The hook was written at this path.
    Installed(PathBuf),
}

/// Writes the pre-commit hook rendered from a [`HookTemplate`].
#[derive(Debug, Clone, Default)]
pub struct Installer {
    template: HookTemplate,
}

impl Installer {
    pub fn with_template(template: HookTemplate) -> Self {
        Installer { template }
    }

    /// Install the hook into `work_dir` unless one is already there.
    ///
    /// The script is written to a staging file next to the hook and then
    /// hard-linked into place, so the hook path only ever holds the complete
    /// script. On error the only possible leftover is a freshly created
    /// `.git/hooks` directory, which is safe to retry over.
    pub fn install(&self, work_dir: &Path) -> Result<HookOutcome, SetupError> {
        let ctx = RepositoryContext::probe(work_dir);
        let Some(hook_path) = ctx.hook_path() else {
            trace!(work_dir = %work_dir.display(), "not a git repository, skipping hook");
            return Ok(HookOutcome::NotARepository);
        };

        ensure_dir(&ctx.hooks_dir())?;

        match fs::symlink_metadata(&hook_path) {
            Ok(_) => return Ok(already_present(hook_path)),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(source) => {
                return Err(SetupError::InspectHook {
                    path: hook_path,
                    source,
                })
            }
        }

        let staging = ctx.hooks_dir().join(STAGING_NAME);
        if let Err(source) = fs::write(&staging, self.template.render()) {
            discard(&staging);
            return Err(SetupError::WriteHook {
                path: hook_path,
                source,
            });
        }
        mark_executable(&staging);

        // hard_link never replaces an existing entry, dangling symlinks included
        let linked = fs::hard_link(&staging, &hook_path);
        discard(&staging);
        match linked {
            Ok(()) => {
                debug!(path = %hook_path.display(), "installed pre-commit hook");
                Ok(HookOutcome::Installed(hook_path))
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(already_present(hook_path)),
            Err(source) => Err(SetupError::WriteHook {
                path: hook_path,
                source,
            }),
        }
    }
}

/// Scratch file the script is written to before it is linked into place.
const STAGING_NAME: &str = ".pre-commit.quickhooks-staging";

fn already_present(hook_path: PathBuf) -> HookOutcome {
    debug!(path = %hook_path.display(), "pre-commit hook already present");
    HookOutcome::AlreadyPresent(hook_path)
}

fn discard(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        if e.kind() != ErrorKind::NotFound {
            trace!(path = %path.display(), error = %e, "could not remove staging file");
        }
    }
}

/// Best-effort `chmod 0755`. Failures are discarded here.
#[cfg(unix)]
fn mark_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Err(e) = fs::set_permissions(path, fs::Permissions::from_mode(0o755)) {
        trace!(path = %path.display(), error = %e, "could not mark hook executable");
    }
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) {}
