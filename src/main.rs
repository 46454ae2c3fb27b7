use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Zero-configuration pre-commit hook bootstrap.
#[derive(Debug, Parser)]
#[command(name = "quickhooks", version, about)]
struct Cli {
    /// Log debug events to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Install the pre-commit hook and write the setup log
    Setup {
        /// Directory to set up (defaults to the current directory)
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Path to a KDL config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the hook and log state as JSON
    Status {
        /// Directory to inspect (defaults to the current directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("QUICKHOOKS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Setup { dir, config } => {
            quickhooks::run_setup(dir.as_deref(), config.as_deref())
        }
        Commands::Status { dir } => quickhooks::run_status(dir.as_deref()),
    }
}
