// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod platform;
pub mod tasks;

use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::cli::CliArgs;
use crate::config::{ConfigFile, load_config};
use crate::errors::Result;
use crate::exec::{RunOptions, ShellExecutor, TaskRunner};
use crate::platform::HostPlatform;
use crate::tasks::{TaskCatalog, TaskName};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (file or built-ins)
/// - host platform detection
/// - task resolution
/// - the sequential shell runner
pub async fn run(args: CliArgs) -> Result<()> {
    let (cfg, source) = load_config(args.config.as_deref().map(Path::new))?;
    info!(?source, "configuration loaded");

    let catalog = TaskCatalog::from_config(&cfg);

    let Some(name) = args.command.task() else {
        print_task_list(&mut io::stdout())?;
        return Ok(());
    };

    let platform = HostPlatform::detect();
    info!(task = %name, platform = %platform, "resolving task");
    let task = catalog.resolve(name, &platform);

    let mut runner = TaskRunner::new(ShellExecutor::new(), run_options(&cfg, &args));
    runner.run(&task).await?;
    Ok(())
}

/// Runner switches from config and CLI flags. `--no-echo` wins over
/// `[config] echo = true`; either one turns the echo off.
pub fn run_options(cfg: &ConfigFile, args: &CliArgs) -> RunOptions {
    RunOptions {
        echo: cfg.config.echo && !args.no_echo,
        dry_run: args.dry_run,
    }
}

/// Print every task with its description, e.g. for `devtasks list`.
pub fn print_task_list(out: &mut impl Write) -> Result<()> {
    let width = TaskName::ALL
        .iter()
        .map(|t| t.as_str().len())
        .max()
        .unwrap_or(0);

    writeln!(out, "Available tasks:")
        .and_then(|_| writeln!(out))
        .context("writing task list")?;

    for name in TaskName::ALL {
        writeln!(out, "  {:<width$}   {}", name.as_str(), name.description())
            .context("writing task list")?;
    }
    Ok(())
}
