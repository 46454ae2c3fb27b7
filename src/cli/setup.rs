use std::path::Path;

use miette::IntoDiagnostic;
use tracing::debug;

use crate::config::Config;
use crate::hook::Installer;
use crate::session::SessionLogger;

/// Execute the setup subcommand.
///
/// Only a bad `--config` is reported. Setup itself keeps the library's
/// contract: failures are discarded and the command still succeeds.
pub fn run(dir: Option<&Path>, config_path: Option<&Path>) -> miette::Result<()> {
    let config = match config_path {
        Some(path) => Config::load(path).into_diagnostic()?,
        None => Config::default(),
    };

    let work_dir = match super::work_dir(dir) {
        Ok(work_dir) => work_dir,
        Err(e) => {
            debug!(error = %e, "setup skipped");
            return Ok(());
        }
    };

    let installer = Installer::with_template(config.hook_template());
    crate::setup::run(&work_dir, &installer, &mut SessionLogger::system());
    Ok(())
}
