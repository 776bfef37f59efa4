// tests/shell_executor.rs
#![cfg(unix)]

use std::error::Error;

use devtasks::errors::DevtasksError;
use devtasks::exec::{CommandOutcome, ExecutorBackend, RunOptions, ShellExecutor, TaskRunner};
use devtasks::tasks::{Task, TaskCommand, TaskName};
use devtasks_test_utils::fake_executor::{LogWriter, new_event_log};
use devtasks_test_utils::with_timeout;
use tempfile::tempdir;

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn shell_reports_exit_codes() -> TestResult {
    let mut exec = ShellExecutor::new();

    let ok = with_timeout(exec.run_command(&TaskCommand::new("true"))).await?;
    assert_eq!(ok, CommandOutcome::Success);

    let failed = with_timeout(exec.run_command(&TaskCommand::new("exit 7"))).await?;
    assert_eq!(failed, CommandOutcome::Failed(7));
    Ok(())
}

#[tokio::test]
async fn real_commands_stop_at_first_failure() -> TestResult {
    let dir = tempdir()?;
    let first = dir.path().join("first");
    let never = dir.path().join("never");

    let task = Task {
        name: TaskName::Check,
        commands: vec![
            TaskCommand::new(format!("touch '{}'", first.display())),
            TaskCommand::new("exit 3"),
            TaskCommand::new(format!("touch '{}'", never.display())),
        ],
    };

    let log = new_event_log();
    let mut runner = TaskRunner::new(ShellExecutor::new(), RunOptions::default())
        .with_echo_writer(LogWriter::new(log.clone()));

    let result = with_timeout(runner.run(&task)).await;

    match result {
        Err(DevtasksError::CommandFailed { command, code, .. }) => {
            assert_eq!(command, "exit 3");
            assert_eq!(code, 3);
        }
        other => panic!("expected CommandFailed, got {other:?}"),
    }
    assert!(first.exists());
    assert!(!never.exists());

    // Only the first two commands were echoed.
    assert_eq!(log.lock().unwrap().len(), 2);
    Ok(())
}
