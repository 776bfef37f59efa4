// src/errors.rs

//! Crate-wide error type and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DevtasksError {
    #[error("Command failed in task '{task}' with exit code {code}: {command}")]
    CommandFailed {
        task: String,
        command: String,
        code: i32,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Exit code recorded for a command that ended without one (killed by a
/// signal).
pub const SIGNALLED: i32 = -1;

impl DevtasksError {
    /// Process exit status for this error.
    ///
    /// A failed command hands its own exit code back to the caller; every
    /// other error exits with 1. Commands killed by a signal are reported
    /// with code -1 and map to 1. Negative codes other than -1 (Windows
    /// NTSTATUS values) are passed through unchanged.
    pub fn exit_code(&self) -> i32 {
        match self {
            DevtasksError::CommandFailed { code, .. } if *code != 0 && *code != SIGNALLED => {
                *code
            }
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, DevtasksError>;
