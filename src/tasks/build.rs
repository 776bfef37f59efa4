// src/tasks/build.rs

//! Command expansion for the `build` task.

use crate::platform::HostPlatform;

use super::TaskCommand;

/// Pinned runtime versions for each platform branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildVersions {
    /// Full patch versions installed through pyenv on Windows hosts.
    pub windows: Vec<String>,
    /// Minor versions handed to `poetry env use` everywhere else.
    pub other: Vec<String>,
}

impl Default for BuildVersions {
    fn default() -> Self {
        Self {
            windows: default_windows_versions(),
            other: default_versions(),
        }
    }
}

pub fn default_windows_versions() -> Vec<String> {
    ["3.8.10", "3.9.13", "3.10.7"].map(String::from).to_vec()
}

pub fn default_versions() -> Vec<String> {
    ["3.8", "3.9", "3.10"].map(String::from).to_vec()
}

/// Expand the build for `platform` into one flat, ordered command list.
///
/// Groups appear in version order; within a group commands keep their
/// fixed order.
pub fn build_commands(platform: &HostPlatform, versions: &BuildVersions) -> Vec<TaskCommand> {
    if platform.is_windows_family() {
        versions
            .windows
            .iter()
            .flat_map(|v| windows_group(v))
            .collect()
    } else {
        versions.other.iter().flat_map(|v| poetry_group(v)).collect()
    }
}

/// pyenv-managed build for one version (Windows hosts).
fn windows_group(version: &str) -> Vec<TaskCommand> {
    [
        format!("pyenv install {version}"),
        format!("pyenv local {version}"),
        "pyenv local".to_string(),
        "pyenv exec python --version".to_string(),
        "pyenv exec poetry env use python".to_string(),
        "pyenv exec poetry update".to_string(),
        "pyenv exec poetry install".to_string(),
        "pyenv exec poetry run poetry build".to_string(),
    ]
    .into_iter()
    .map(|cmd| TaskCommand::in_group(cmd, version))
    .collect()
}

fn poetry_group(version: &str) -> Vec<TaskCommand> {
    [
        format!("poetry env use {version}"),
        "poetry update".to_string(),
        "poetry install".to_string(),
        "poetry run poetry build".to_string(),
    ]
    .into_iter()
    .map(|cmd| TaskCommand::in_group(cmd, version))
    .collect()
}
