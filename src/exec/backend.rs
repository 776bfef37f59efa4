// src/exec/backend.rs

//! Pluggable executor backend abstraction.
//!
//! The task runner talks to an `ExecutorBackend` instead of spawning
//! processes itself. Production code uses [`ShellExecutor`]; tests swap in a
//! fake that records commands and reports scripted outcomes.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;

use anyhow::Context;
use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::{Result, SIGNALLED};
use crate::tasks::TaskCommand;

use super::CommandOutcome;

/// Trait abstracting how a single command is executed.
pub trait ExecutorBackend: Send {
    /// Run `command` to completion and report how it exited.
    ///
    /// Errors are reserved for failures to run the command at all (e.g. the
    /// shell could not be spawned); a non-zero exit is an `Ok` outcome.
    fn run_command<'a>(
        &'a mut self,
        command: &'a TaskCommand,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + 'a>>;
}

/// Runs commands through the platform shell with inherited stdio, so the
/// tool's output reaches the terminal unmodified.
#[derive(Debug, Clone, Default)]
pub struct ShellExecutor;

impl ShellExecutor {
    pub fn new() -> Self {
        Self
    }
}

/// Build a shell command appropriate for the platform.
pub fn shell_command(line: &str) -> Command {
    if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(line);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(line);
        c
    }
}

impl ExecutorBackend for ShellExecutor {
    fn run_command<'a>(
        &'a mut self,
        command: &'a TaskCommand,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + 'a>> {
        Box::pin(run_in_shell(command))
    }
}

async fn run_in_shell(command: &TaskCommand) -> Result<CommandOutcome> {
    let mut cmd = shell_command(&command.cmd);
    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(true);

    debug!(cmd = %command.cmd, group = ?command.group, "spawning shell");

    let mut child = cmd
        .spawn()
        .with_context(|| format!("spawning shell for command '{}'", command.cmd))?;

    let status = child
        .wait()
        .await
        .with_context(|| format!("waiting for command '{}'", command.cmd))?;

    let code = status.code().unwrap_or(SIGNALLED);
    info!(
        cmd = %command.cmd,
        exit_code = code,
        success = status.success(),
        "command exited"
    );

    Ok(if status.success() {
        CommandOutcome::Success
    } else {
        CommandOutcome::Failed(code)
    })
}
