// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `nblauncher`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "nblauncher",
    version,
    about = "Manage named launch tasks and run them as child processes.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the task storage file (JSON).
    ///
    /// Default: `nblauncher/tasks.json` in the user's config directory.
    #[arg(long, value_name = "PATH")]
    pub storage: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `NBLAUNCHER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List all tasks with their last-run times.
    List,

    /// Show a task and its compiled command line.
    Show {
        /// Task name (case-insensitive).
        name: String,
    },

    /// Start one or more tasks by name and stream their output.
    Run {
        /// Task names (case-insensitive).
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Clone a task under a dated name.
    Clone {
        /// Task name (case-insensitive).
        name: String,
    },

    /// Remove a task from the registry.
    Remove {
        /// Task name (case-insensitive).
        name: String,
    },
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
