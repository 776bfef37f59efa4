// src/platform.rs

//! Host platform identification.
//!
//! The `build` task picks its command list from a platform identification
//! string such as `Windows-x86_64` or `Linux-aarch64`. Only the `"Win"`
//! prefix matters; the comparison is case-sensitive and nothing is
//! normalised, so unknown platforms take the non-Windows branch.

use std::env;

use tracing::debug;

/// Environment variable that replaces the detected identification string.
pub const PLATFORM_ENV_VAR: &str = "DEVTASKS_PLATFORM";

const WINDOWS_PREFIX: &str = "Win";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPlatform {
    identification: String,
}

impl HostPlatform {
    /// Wrap an identification string verbatim.
    pub fn new(identification: impl Into<String>) -> Self {
        Self {
            identification: identification.into(),
        }
    }

    /// Detect the current host, honouring `DEVTASKS_PLATFORM` if set.
    pub fn detect() -> Self {
        match env::var(PLATFORM_ENV_VAR) {
            Ok(value) if !value.is_empty() => {
                debug!(platform = %value, "platform overridden from environment");
                Self::new(value)
            }
            _ => Self::from_os_arch(env::consts::OS, env::consts::ARCH),
        }
    }

    /// Build `<OsName>-<arch>` from Rust's target OS/arch names.
    pub fn from_os_arch(os: &str, arch: &str) -> Self {
        Self::new(format!("{}-{}", os_display_name(os), arch))
    }

    pub fn identification(&self) -> &str {
        &self.identification
    }

    pub fn is_windows_family(&self) -> bool {
        self.identification.starts_with(WINDOWS_PREFIX)
    }
}

impl std::fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.identification)
    }
}

fn os_display_name(os: &str) -> String {
    match os {
        "windows" => "Windows".to_string(),
        "macos" => "macOS".to_string(),
        "linux" => "Linux".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::from("Unknown"),
            }
        }
    }
}
