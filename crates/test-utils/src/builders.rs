
use devtasks::config::{ConfigFile, RawConfigFile, TaskConfig};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn with_task(mut self, name: &str, cmds: &[&str]) -> Self {
        self.config.task.insert(
            name.to_string(),
            TaskConfig {
                cmds: cmds.iter().map(|c| c.to_string()).collect(),
            },
        );
        self
    }

    pub fn with_versions(mut self, versions: &[&str]) -> Self {
        self.config.build.versions = versions.iter().map(|v| v.to_string()).collect();
        self
    }

    pub fn with_windows_versions(mut self, versions: &[&str]) -> Self {
        self.config.build.windows_versions = versions.iter().map(|v| v.to_string()).collect();
        self
    }

    pub fn echo(mut self, val: bool) -> Self {
        self.config.config.echo = val;
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
