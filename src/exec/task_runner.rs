// src/exec/task_runner.rs

//! Sequential, fail-fast task runner.

use std::io::{self, Write};

use anyhow::Context;
use tracing::{error, info};

use crate::errors::{DevtasksError, Result};
use crate::tasks::{Task, TaskName};

use super::{CommandOutcome, ExecutorBackend};

/// Per-invocation switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Print each command before running it.
    pub echo: bool,
    /// Print commands without running them. Implies echo.
    pub dry_run: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            echo: true,
            dry_run: false,
        }
    }
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub task: TaskName,
    /// Commands actually executed (0 for a dry run).
    pub executed: usize,
}

/// Runs a task's commands one at a time, in order.
///
/// Each command is echoed before it starts. The first non-zero exit stops
/// the run and is returned as [`DevtasksError::CommandFailed`]; later
/// commands are never started.
pub struct TaskRunner<E> {
    executor: E,
    options: RunOptions,
    echo_out: Box<dyn Write + Send>,
}

impl<E: ExecutorBackend> TaskRunner<E> {
    /// Runner that echoes to stdout.
    pub fn new(executor: E, options: RunOptions) -> Self {
        Self {
            executor,
            options,
            echo_out: Box::new(io::stdout()),
        }
    }

    /// Redirect the echo to another writer.
    pub fn with_echo_writer(mut self, out: impl Write + Send + 'static) -> Self {
        self.echo_out = Box::new(out);
        self
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub async fn run(&mut self, task: &Task) -> Result<RunSummary> {
        info!(
            task = %task.name,
            commands = task.commands.len(),
            dry_run = self.options.dry_run,
            "starting task"
        );

        let mut executed = 0;

        for command in &task.commands {
            if self.options.echo || self.options.dry_run {
                self.echo(&command.cmd)?;
            }

            if self.options.dry_run {
                continue;
            }

            match self.executor.run_command(command).await? {
                CommandOutcome::Success => executed += 1,
                CommandOutcome::Failed(code) => {
                    error!(
                        task = %task.name,
                        cmd = %command.cmd,
                        group = ?command.group,
                        exit_code = code,
                        "command failed; aborting task"
                    );
                    return Err(DevtasksError::CommandFailed {
                        task: task.name.to_string(),
                        command: command.cmd.clone(),
                        code,
                    });
                }
            }
        }

        info!(task = %task.name, executed, "task finished");

        Ok(RunSummary {
            task: task.name,
            executed,
        })
    }

    fn echo(&mut self, line: &str) -> Result<()> {
        writeln!(self.echo_out, "{line}")
            .and_then(|_| self.echo_out.flush())
            .context("writing command echo")?;
        Ok(())
    }
}
