// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`backend`] provides the `ExecutorBackend` trait and the production
//!   `ShellExecutor`, which runs one command through the platform shell.
//!   Tests replace it with a fake implementation.
//! - [`task_runner`] walks a task's command list in order, echoing and
//!   executing each command and stopping at the first failure.

pub mod backend;
pub mod task_runner;

pub use backend::{ExecutorBackend, ShellExecutor};
pub use task_runner::{RunOptions, RunSummary, TaskRunner};

/// How a single command exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Success,
    /// Non-zero exit; -1 when the process was killed by a signal.
    Failed(i32),
}
