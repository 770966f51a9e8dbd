//! Command-line inspector for Bruker NMR processed data.
//!
//! The `pdata` binary is a thin wrapper around this library:
//! - `config`: command-line and environment configuration
//! - `commands`: `members`, `params` and `decode`
//! - `output`: text rendering of decoded series
//!
//! # Example
//!
//! ```no_run
//! use pdata_cli::{Cli, run};
//!
//! fn main() -> anyhow::Result<()> {
//!     let cli = Cli::from_args();
//!     run(&cli, &mut std::io::stdout().lock())
//! }
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod commands;
pub mod config;
pub mod output;

use std::io::Write;

use anyhow::Result;

pub use config::{Cli, Command, DecodeArgs, ParamsArgs};

/// Run the selected subcommand, writing its output to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Command::Members { archive } => {
            let archive = commands::open_archive(archive)?;
            commands::members(&*archive, out)
        }
        Command::Params(args) => {
            let archive = commands::open_archive(&args.archive)?;
            commands::params(&*archive, args, out)
        }
        Command::Decode(args) => {
            let archive = commands::open_archive(&args.archive)?;
            commands::decode(&*archive, args, out)
        }
    }
}
