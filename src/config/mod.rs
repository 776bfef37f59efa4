// src/config/mod.rs

//! Configuration loading and validation for devtasks.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk, or fall back to built-ins (`loader.rs`).
//! - Validate task overrides and pinned versions (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{ConfigSource, load_and_validate, load_config, load_from_path};
pub use model::{BuildSection, ConfigFile, ConfigSection, RawConfigFile, TaskConfig};
pub use validate::validate_config;
