// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand, ValueEnum};

use crate::tasks::TaskName;

/// Command-line arguments for `devtasks`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "devtasks",
    version,
    about = "Run the project's formatter, linter, tests, docs and packaging builds.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Devtasks.toml` in the current working directory. When the
    /// default file is missing the built-in command lists are used.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DEVTASKS_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    /// Echo the commands a task would run, but don't execute any of them.
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Don't echo commands before running them.
    #[arg(long, global = true)]
    pub no_echo: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands. Every task subcommand takes no flags of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run black and isort
    Format,
    /// Run flake8
    Check,
    /// Run tests
    Test,
    /// Build the API and HTML documentation
    BuildDoc,
    /// Build packages for every pinned Python version
    Build,
    /// List available tasks
    List,
}

impl Command {
    /// The task this subcommand runs, or `None` for `list`.
    pub fn task(self) -> Option<TaskName> {
        match self {
            Command::Format => Some(TaskName::Format),
            Command::Check => Some(TaskName::Check),
            Command::Test => Some(TaskName::Test),
            Command::BuildDoc => Some(TaskName::BuildDoc),
            Command::Build => Some(TaskName::Build),
            Command::List => None,
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
