// src/config/validate.rs

use std::collections::BTreeMap;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{DevtasksError, Result};
use crate::tasks::{BuildVersions, TaskName};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::DevtasksError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_build_versions(&raw)?;
        let task = validate_task_overrides(&raw)?;

        let build = BuildVersions {
            windows: raw.build.windows_versions,
            other: raw.build.versions,
        };
        Ok(ConfigFile::new_unchecked(raw.config, build, task))
    }
}

/// Validate a raw config without consuming it.
pub fn validate_config(cfg: &RawConfigFile) -> Result<()> {
    validate_build_versions(cfg)?;
    validate_task_overrides(cfg)?;
    Ok(())
}

fn validate_build_versions(cfg: &RawConfigFile) -> Result<()> {
    ensure_entries("[build].windows_versions", &cfg.build.windows_versions)?;
    ensure_entries("[build].versions", &cfg.build.versions)?;
    Ok(())
}

fn validate_task_overrides(cfg: &RawConfigFile) -> Result<BTreeMap<TaskName, Vec<String>>> {
    let mut overrides = BTreeMap::new();

    for (key, task) in cfg.task.iter() {
        let name: TaskName = key
            .parse()
            .map_err(|_| DevtasksError::TaskNotFound(key.clone()))?;

        if name.is_computed() {
            return Err(DevtasksError::ConfigError(format!(
                "task '{}' is computed from the host platform; configure [build] instead of [task.{}]",
                name, key
            )));
        }

        ensure_entries(&format!("[task.{}].cmds", key), &task.cmds)?;

        if overrides.insert(name, task.cmds.clone()).is_some() {
            return Err(DevtasksError::ConfigError(format!(
                "task '{}' is configured more than once",
                name
            )));
        }
    }

    Ok(overrides)
}

fn ensure_entries(field: &str, values: &[String]) -> Result<()> {
    if values.is_empty() {
        return Err(DevtasksError::ConfigError(format!(
            "{} must contain at least one entry",
            field
        )));
    }
    if let Some(pos) = values.iter().position(|v| v.trim().is_empty()) {
        return Err(DevtasksError::ConfigError(format!(
            "{} has a blank entry at index {}",
            field, pos
        )));
    }
    Ok(())
}
