// tests/host_context.rs

//! Tests that change the working directory or the environment. They share
//! one lock because both are process-wide.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use tempfile::tempdir;

use devtasks::config::{ConfigSource, load_config};
use devtasks::platform::{HostPlatform, PLATFORM_ENV_VAR};
use devtasks::tasks::{TaskCatalog, TaskName};

static HOST_STATE: Mutex<()> = Mutex::new(());

#[test]
fn default_config_is_optional_and_read_when_present() {
    let _guard = HOST_STATE.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempdir().unwrap();
    let previous = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();

    let without_file = load_config(None);

    fs::write(
        dir.path().join("Devtasks.toml"),
        "[config]\necho = false\n\n[task.check]\ncmds = [\"ruff check .\"]\n",
    )
    .unwrap();
    let with_file = load_config(None);

    env::set_current_dir(previous).unwrap();

    let (cfg, source) = without_file.unwrap();
    assert_eq!(source, ConfigSource::BuiltIn);
    assert!(cfg.config.echo);
    assert!(cfg.task.is_empty());

    let (cfg, source) = with_file.unwrap();
    assert_eq!(source, ConfigSource::File(PathBuf::from("Devtasks.toml")));
    assert!(!cfg.config.echo);
    assert_eq!(
        cfg.task.get(&TaskName::Check),
        Some(&vec!["ruff check .".to_string()])
    );
}

#[test]
fn platform_env_var_replaces_detection_verbatim() {
    let _guard = HOST_STATE.lock().unwrap_or_else(|e| e.into_inner());
    let previous = env::var(PLATFORM_ENV_VAR).ok();

    // SAFETY: env mutation is serialised by HOST_STATE within this binary.
    unsafe { env::set_var(PLATFORM_ENV_VAR, "Windows-11") };
    let windows = HostPlatform::detect();

    unsafe { env::set_var(PLATFORM_ENV_VAR, " win32 custom ") };
    let untrimmed = HostPlatform::detect();

    unsafe { env::remove_var(PLATFORM_ENV_VAR) };
    let detected = HostPlatform::detect();

    if let Some(value) = previous {
        unsafe { env::set_var(PLATFORM_ENV_VAR, value) };
    }

    assert_eq!(windows.identification(), "Windows-11");
    assert!(windows.is_windows_family());
    let build = TaskCatalog::default().resolve(TaskName::Build, &windows);
    assert_eq!(build.commands.len(), 24);

    assert_eq!(untrimmed.identification(), " win32 custom ");
    assert!(!untrimmed.is_windows_family());

    assert_eq!(
        detected,
        HostPlatform::from_os_arch(env::consts::OS, env::consts::ARCH)
    );
}
