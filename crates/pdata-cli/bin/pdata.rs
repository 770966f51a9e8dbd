//! `pdata` binary entry point.
//!
//! Parses the command line, installs logging on stderr, and runs the
//! selected subcommand against stdout.

use anyhow::Result;
use pdata_cli::{Cli, run};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::from_args();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Running {:?}", cli.command);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)
}
