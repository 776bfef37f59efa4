// src/tasks/mod.rs

//! Task model and catalog.
//!
//! A task is a name plus an ordered list of shell commands. The lists for
//! `format`, `check`, `test` and `build-doc` are fixed (or overridden from
//! config); the `build` list is computed from the host platform in
//! [`build`].
//!
//! - [`catalog`] owns the default command lists and resolves a [`TaskName`]
//!   into a runnable [`Task`].
//! - [`build`] expands the pinned runtime versions into per-version command
//!   groups.

pub mod build;
pub mod catalog;

use std::fmt;
use std::str::FromStr;

pub use build::{BuildVersions, build_commands};
pub use catalog::TaskCatalog;

/// The fixed set of tasks this tool knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaskName {
    Format,
    Check,
    Test,
    BuildDoc,
    Build,
}

impl TaskName {
    /// All tasks, in listing order.
    pub const ALL: [TaskName; 5] = [
        TaskName::Build,
        TaskName::BuildDoc,
        TaskName::Check,
        TaskName::Format,
        TaskName::Test,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskName::Format => "format",
            TaskName::Check => "check",
            TaskName::Test => "test",
            TaskName::BuildDoc => "build-doc",
            TaskName::Build => "build",
        }
    }

    /// One-line description shown by `devtasks list`.
    pub fn description(self) -> &'static str {
        match self {
            TaskName::Format => "Run black and isort",
            TaskName::Check => "Run flake8",
            TaskName::Test => "Run tests",
            TaskName::BuildDoc => "Build the API and HTML documentation",
            TaskName::Build => "Build",
        }
    }

    /// Whether the command list is computed at invocation time and therefore
    /// can't be replaced from config.
    pub fn is_computed(self) -> bool {
        matches!(self, TaskName::Build)
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "format" => Ok(TaskName::Format),
            "check" => Ok(TaskName::Check),
            "test" => Ok(TaskName::Test),
            "build-doc" | "build_doc" => Ok(TaskName::BuildDoc),
            "build" => Ok(TaskName::Build),
            other => Err(format!("unknown task '{other}'")),
        }
    }
}

/// A single shell command, passed verbatim to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCommand {
    pub cmd: String,
    /// Runtime version this command belongs to (only set for `build`).
    pub group: Option<String>,
}

impl TaskCommand {
    pub fn new(cmd: impl Into<String>) -> Self {
        Self {
            cmd: cmd.into(),
            group: None,
        }
    }

    pub fn in_group(cmd: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            cmd: cmd.into(),
            group: Some(group.into()),
        }
    }
}

/// A resolved task: its name and the commands to run, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: TaskName,
    pub commands: Vec<TaskCommand>,
}

impl Task {
    /// Just the command strings, in order.
    pub fn command_lines(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.cmd.as_str()).collect()
    }
}
