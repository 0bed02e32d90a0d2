//! Subcommand definitions and their runners.
//!
//! The binary parses arguments into [`Command`] and hands it to [`run`];
//! everything below stays testable without a process boundary.

mod analyze;
mod check;
mod watch;

pub use analyze::*;
pub use check::*;
pub use watch::*;

use crate::conf::Overrides;
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse the logs once, write the dashboard data and print a summary
    Analyze {
        #[command(flatten)]
        source: SourceArgs,

        /// Skip writing the JSON artifacts
        #[arg(long)]
        no_write: bool,

        /// Print the full statistics as JSON instead of the summary
        #[arg(long)]
        json: bool,
    },

    /// Regenerate the dashboard data whenever the logs change
    Watch {
        #[command(flatten)]
        source: SourceArgs,

        /// Polling interval in seconds
        #[arg(short, long)]
        interval: Option<u64>,
    },

    /// Validate configuration and list the resolved sources
    Check {
        /// Path to the config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Inputs shared by `analyze` and `watch`.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Access log files or glob patterns (plain or gzip)
    pub paths: Vec<String>,

    /// Path to the config file (default: ./logdash.hcl when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output directory for the dashboard data
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

impl SourceArgs {
    pub fn overrides(&self, interval_secs: Option<u64>) -> Overrides {
        Overrides {
            config: self.config.clone(),
            paths: self.paths.clone(),
            output_dir: self.output_dir.clone(),
            interval_secs,
        }
    }
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Analyze {
            source,
            no_write,
            json,
        } => run_analyze(&source.overrides(None), !no_write, json),
        Command::Watch { source, interval } => run_watch(&source.overrides(interval)),
        Command::Check { config } => run_check(config),
    }
}
