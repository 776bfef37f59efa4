// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from this file.
    File(PathBuf),
    /// No file; built-in command lists.
    BuiltIn,
}

/// Load a configuration file from a given path and return the raw
/// `RawConfigFile`.
///
/// This only performs TOML deserialization; use [`load_and_validate`] for
/// semantic checks.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Resolve the configuration for a run.
///
/// - An explicit path must exist.
/// - Without one, `Devtasks.toml` in the working directory is used if
///   present, otherwise the built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<(ConfigFile, ConfigSource)> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = default_config_path();
            if !path.is_file() {
                debug!(path = %path.display(), "no config file; using built-in tasks");
                return Ok((ConfigFile::default(), ConfigSource::BuiltIn));
            }
            path
        }
    };

    let cfg = load_and_validate(&path)?;
    Ok((cfg, ConfigSource::File(path)))
}

/// Default config location: `Devtasks.toml` in the current directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Devtasks.toml")
}
