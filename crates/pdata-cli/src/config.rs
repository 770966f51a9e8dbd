//! Command-line configuration.
//!
//! Every option can also be set through a `PDATA_*` environment variable.
//! `RUST_LOG` takes precedence over `--log-level` when both are set.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use pdata_formats::reader::{DEFAULT_BINARY_MEMBER, DEFAULT_PARAMETER_MEMBER};

/// Default number of samples shown per series
pub const DEFAULT_PREVIEW_LIMIT: usize = 200;

/// Top-level command line.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pdata",
    about = "Inspect and decode Bruker NMR processed data archives",
    version
)]
pub struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, env = "PDATA_LOG", default_value = "warn")]
    pub log_level: String,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the file members of an archive
    Members {
        /// Pdata directory or ZIP file
        archive: PathBuf,
    },

    /// Print a parameter block and the decoding settings derived from it
    Params(ParamsArgs),

    /// Decode binary members
    Decode(DecodeArgs),
}

/// Arguments of `pdata params`.
#[derive(Debug, Clone, Args)]
pub struct ParamsArgs {
    /// Pdata directory or ZIP file
    pub archive: PathBuf,

    /// Parameter member to read
    #[arg(long, env = "PDATA_PROCS", default_value = DEFAULT_PARAMETER_MEMBER)]
    pub procs: String,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Arguments of `pdata decode`.
#[derive(Debug, Clone, Args)]
pub struct DecodeArgs {
    /// Pdata directory or ZIP file
    pub archive: PathBuf,

    /// Binary member to decode (repeatable)
    #[arg(short = 'm', long = "member", default_value = DEFAULT_BINARY_MEMBER)]
    pub members: Vec<String>,

    /// Parameter member (defaults to `procs` next to the first member)
    #[arg(long, env = "PDATA_PROCS")]
    pub procs: Option<String>,

    /// Leave samples as stored instead of applying 2^(-NC_proc)
    #[arg(long)]
    pub no_scale: bool,

    /// Number of samples shown per series
    #[arg(long, env = "PDATA_PREVIEW_LIMIT", default_value_t = DEFAULT_PREVIEW_LIMIT)]
    pub limit: usize,

    /// Print every sample as JSON instead of a preview
    ///
    /// JSON has no NaN or infinity, so non-finite float samples are written
    /// as `null`.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse configuration from command-line arguments.
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }
}

impl DecodeArgs {
    /// Parameter member to read for this decode.
    pub fn parameter_member(&self) -> String {
        match (&self.procs, self.members.first()) {
            (Some(procs), _) => procs.clone(),
            (None, Some(first)) => {
                pdata_formats::archive::sibling_member(first, DEFAULT_PARAMETER_MEMBER)
            }
            (None, None) => DEFAULT_PARAMETER_MEMBER.to_string(),
        }
    }
}
