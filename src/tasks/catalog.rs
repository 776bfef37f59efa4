// src/tasks/catalog.rs

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::ConfigFile;
use crate::platform::HostPlatform;

use super::build::{BuildVersions, build_commands};
use super::{Task, TaskCommand, TaskName};

/// Built-in command list for a fixed task. `build` has none; it is computed.
pub fn default_commands(name: TaskName) -> &'static [&'static str] {
    match name {
        TaskName::Format => &["black .", "isort ."],
        TaskName::Check => &["flake8 ."],
        TaskName::Test => &["pytest -vv --cov --junitxml=../build/reports/tests.xml"],
        TaskName::BuildDoc => &[
            "sphinx-apidoc -P -f -o docs/source src/pygeofun",
            "sphinx-build -b html docs dist/docs",
        ],
        TaskName::Build => &[],
    }
}

/// Resolves task names into concrete command lists.
///
/// Holds the fixed lists (built-in, with config overrides applied) and the
/// pinned versions used to expand `build`.
#[derive(Debug, Clone)]
pub struct TaskCatalog {
    fixed: BTreeMap<TaskName, Vec<String>>,
    versions: BuildVersions,
}

impl Default for TaskCatalog {
    fn default() -> Self {
        Self::from_config(&ConfigFile::default())
    }
}

impl TaskCatalog {
    pub fn from_config(cfg: &ConfigFile) -> Self {
        let fixed = TaskName::ALL
            .into_iter()
            .filter(|name| !name.is_computed())
            .map(|name| {
                let cmds = match cfg.task.get(&name) {
                    Some(overridden) => overridden.clone(),
                    None => default_commands(name)
                        .iter()
                        .map(|s| s.to_string())
                        .collect(),
                };
                (name, cmds)
            })
            .collect();

        Self {
            fixed,
            versions: cfg.build.clone(),
        }
    }

    /// Produce the ordered command list for `name` on `platform`.
    ///
    /// Pure: the same catalog and platform always give the same task.
    pub fn resolve(&self, name: TaskName, platform: &HostPlatform) -> Task {
        let commands = if name.is_computed() {
            build_commands(platform, &self.versions)
        } else {
            self.fixed
                .get(&name)
                .map(|cmds| cmds.iter().map(TaskCommand::new).collect())
                .unwrap_or_default()
        };

        debug!(
            task = %name,
            platform = %platform,
            commands = commands.len(),
            "resolved task"
        );

        Task { name, commands }
    }
}
