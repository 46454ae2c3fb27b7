//! Zero-configuration pre-commit hook bootstrap.
//!
//! Call [`setup()`] once (at startup, or whenever convenient) to install a
//! pre-commit hook into the current git repository and record a setup log.
//! It never fails and never reports anything to the caller.

pub mod config;
pub mod domain;
pub mod error;
pub mod hook;
pub mod probe;
pub mod session;
pub mod setup;

pub(crate) mod cli;

pub use error::SetupError;
pub use setup::{setup, setup_in};

/// Run the setup subcommand for the binary.
///
/// Bridges `main.rs` to the CLI internals. Library callers should use
/// [`setup()`] or [`setup::run`] instead.
pub fn run_setup(
    dir: Option<&std::path::Path>,
    config: Option<&std::path::Path>,
) -> miette::Result<()> {
    cli::setup::run(dir, config)
}

/// Run the status subcommand for the binary: print a JSON report to stdout.
pub fn run_status(dir: Option<&std::path::Path>) -> miette::Result<()> {
    cli::status::run(dir)
}
