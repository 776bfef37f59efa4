// tests/cli_args.rs

use clap::Parser;

use devtasks::cli::{CliArgs, Command, LogLevel};
use devtasks::logging::resolve_level;
use devtasks::platform::HostPlatform;
use devtasks::{print_task_list, run_options};
use devtasks::tasks::TaskName;
use devtasks_test_utils::builders::ConfigFileBuilder;

#[test]
fn task_subcommands_map_to_tasks() {
    let cases = [
        ("format", Some(TaskName::Format)),
        ("check", Some(TaskName::Check)),
        ("test", Some(TaskName::Test)),
        ("build-doc", Some(TaskName::BuildDoc)),
        ("build", Some(TaskName::Build)),
        ("list", None),
    ];

    for (arg, expected) in cases {
        let args = CliArgs::try_parse_from(["devtasks", arg]).unwrap();
        assert_eq!(args.command.task(), expected, "subcommand {arg}");
    }
}

#[test]
fn global_flags_parse_before_or_after_the_task() {
    let args = CliArgs::try_parse_from([
        "devtasks",
        "--config",
        "ci/Devtasks.toml",
        "build",
        "--dry-run",
        "--log-level",
        "debug",
    ])
    .unwrap();

    assert_eq!(args.command, Command::Build);
    assert_eq!(args.config.as_deref(), Some("ci/Devtasks.toml"));
    assert!(args.dry_run);
    assert!(!args.no_echo);
    assert!(matches!(args.log_level, Some(LogLevel::Debug)));
}

#[test]
fn task_subcommands_take_no_arguments() {
    assert!(CliArgs::try_parse_from(["devtasks", "format", "src/"]).is_err());
    assert!(CliArgs::try_parse_from(["devtasks"]).is_err());
}

#[test]
fn log_level_prefers_flag_then_env() {
    assert_eq!(
        resolve_level(Some(LogLevel::Trace), Some("error")),
        tracing::Level::TRACE
    );
    assert_eq!(resolve_level(None, Some(" Debug ")), tracing::Level::DEBUG);
    assert_eq!(resolve_level(None, Some("warning")), tracing::Level::WARN);
    assert_eq!(resolve_level(None, Some("nonsense")), tracing::Level::WARN);
    assert_eq!(resolve_level(None, None), tracing::Level::WARN);
}

#[test]
fn task_list_shows_every_task_with_description() {
    let mut out = Vec::new();
    print_task_list(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("Available tasks:"));
    for name in TaskName::ALL {
        let line = text
            .lines()
            .find(|l| l.trim_start().starts_with(&format!("{} ", name.as_str())))
            .unwrap_or_else(|| panic!("missing {name} in:\n{text}"));
        assert!(line.ends_with(name.description()));
    }
}

#[test]
fn platform_names_follow_os_and_arch() {
    assert_eq!(
        HostPlatform::from_os_arch("windows", "x86_64").identification(),
        "Windows-x86_64"
    );
    assert_eq!(
        HostPlatform::from_os_arch("macos", "aarch64").identification(),
        "macOS-aarch64"
    );
    assert_eq!(
        HostPlatform::from_os_arch("freebsd", "x86_64").identification(),
        "Freebsd-x86_64"
    );
    assert!(HostPlatform::from_os_arch("windows", "x86").is_windows_family());
    assert!(!HostPlatform::from_os_arch("linux", "x86_64").is_windows_family());
}

#[test]
fn echo_follows_config_and_no_echo_flag() {
    let echo_on = ConfigFileBuilder::new().build();
    let echo_off = ConfigFileBuilder::new().echo(false).build();

    let plain = CliArgs::try_parse_from(["devtasks", "format"]).unwrap();
    let quiet = CliArgs::try_parse_from(["devtasks", "format", "--no-echo"]).unwrap();
    let dry = CliArgs::try_parse_from(["devtasks", "--dry-run", "build"]).unwrap();

    assert!(run_options(&echo_on, &plain).echo);
    assert!(!run_options(&echo_on, &quiet).echo);
    assert!(!run_options(&echo_off, &plain).echo);
    assert!(!run_options(&echo_off, &quiet).echo);

    let options = run_options(&echo_off, &dry);
    assert!(options.dry_run);
    assert!(!options.echo);
}
