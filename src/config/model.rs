// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::tasks::build::{default_versions, default_windows_versions};
use crate::tasks::{BuildVersions, TaskName};

/// Configuration exactly as read from a TOML file.
///
/// ```toml
/// [config]
/// echo = true
///
/// [build]
/// windows_versions = ["3.8.10", "3.9.13", "3.10.7"]
/// versions = ["3.8", "3.9", "3.10"]
///
/// [task.format]
/// cmds = ["black .", "isort ."]
/// ```
///
/// All sections are optional. Convert into [`ConfigFile`] with `try_from`,
/// which runs validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub config: ConfigSection,

    #[serde(default)]
    pub build: BuildSection,

    /// Command list overrides from `[task.<name>]`, keyed by task name.
    #[serde(default)]
    pub task: BTreeMap<String, TaskConfig>,
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigSection {
    /// Print each command before running it.
    #[serde(default = "default_echo")]
    pub echo: bool,
}

fn default_echo() -> bool {
    true
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            echo: default_echo(),
        }
    }
}

/// `[build]` section: pinned runtime versions, in build order.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildSection {
    #[serde(default = "default_windows_versions")]
    pub windows_versions: Vec<String>,

    #[serde(default = "default_versions")]
    pub versions: Vec<String>,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            windows_versions: default_windows_versions(),
            versions: default_versions(),
        }
    }
}

/// `[task.<name>]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskConfig {
    /// Replacement command list, run in order.
    pub cmds: Vec<String>,
}

/// Validated configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub config: ConfigSection,
    pub build: BuildVersions,
    /// Overridden command lists for fixed tasks.
    pub task: BTreeMap<TaskName, Vec<String>>,
}

impl ConfigFile {
    /// Construct without validation. Only `validate.rs` should call this.
    pub(crate) fn new_unchecked(
        config: ConfigSection,
        build: BuildVersions,
        task: BTreeMap<TaskName, Vec<String>>,
    ) -> Self {
        Self {
            config,
            build,
            task,
        }
    }
}
