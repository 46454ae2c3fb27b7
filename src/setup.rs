use std::path::Path;

use tracing::{debug, trace};

use crate::error::SetupError;
use crate::hook::Installer;
use crate::session::{Clock, SessionLogger, TokenSource};

/// Install the pre-commit hook and write the setup log for the process
/// working directory.
///
/// Never fails and never reports anything: every error, including an
/// unreadable working directory, is discarded. Safe to call any number of
/// times; after the first successful install only the log is rewritten.
pub fn setup() {
    match std::env::current_dir() {
        Ok(work_dir) => setup_in(&work_dir),
        Err(e) => trace!(error = %SetupError::WorkingDir(e), "setup skipped"),
    }
}

/// [`setup`] for an explicit working directory.
pub fn setup_in(work_dir: &Path) {
    run(work_dir, &Installer::default(), &mut SessionLogger::system());
}

/// Run the installer then the logger, discarding both errors.
///
/// Discarded errors are only visible as `trace` events.
/// The logger runs even when the installer failed.
pub fn run<C: Clock, T: TokenSource>(
    work_dir: &Path,
    installer: &Installer,
    logger: &mut SessionLogger<C, T>,
) {
    match installer.install(work_dir) {
        Ok(outcome) => debug!(?outcome, "hook step finished"),
        Err(e) => trace!(error = %e, "hook step failed"),
    }
    match logger.write(work_dir) {
        Ok(path) => debug!(path = %path.display(), "log step finished"),
        Err(e) => trace!(error = %e, "log step failed"),
    }
}
