// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::default_config_path;
use crate::types::{parse_clock, Minute, PolicyKind};

/// Command-line arguments for `dayplan`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dayplan",
    version,
    about = "Schedule dependent tasks on a single timeline by dynamic priority.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the task list (TOML).
    ///
    /// Default: `Dayplan.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value_os_t = default_config_path())]
    pub config: PathBuf,

    /// Scoring policy; overrides `[config].policy`.
    #[arg(long, value_enum, value_name = "POLICY")]
    pub policy: Option<PolicyArg>,

    /// Start of the day as `HH:MM` or minutes; overrides `[config].start_time`.
    #[arg(long, value_name = "TIME", value_parser = parse_clock)]
    pub start: Option<Minute>,

    /// Iteration cap for the run; overrides `[config].max_iterations`.
    #[arg(long, value_name = "N")]
    pub max_iterations: Option<u64>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DAYPLAN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate and list the tasks, but don't schedule anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Only print the final summary.
    #[arg(long)]
    pub quiet: bool,

    /// Also schedule several reorderings of the input concurrently and fail
    /// if any of them disagrees with the original order.
    #[arg(long)]
    pub verify_order: bool,
}

/// Scoring policy as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum PolicyArg {
    Utility,
    TimeAffinity,
}

impl From<PolicyArg> for PolicyKind {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Utility => PolicyKind::Utility,
            PolicyArg::TimeAffinity => PolicyKind::TimeAffinity,
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
