use std::collections::HashMap;
use std::future::Future;
use std::io::{self, Write};
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use devtasks::errors::Result;
use devtasks::exec::{CommandOutcome, ExecutorBackend};
use devtasks::tasks::TaskCommand;

/// Ordered record of everything a runner did, shared between the fake
/// executor and the echo writer.
///
/// Entries look like `"echo: black ."` and `"run: black ."`.
pub type EventLog = Arc<Mutex<Vec<String>>>;

pub fn new_event_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// A fake executor that:
/// - records which commands were "run"
/// - reports Success unless the command was scripted to fail.
pub struct FakeExecutor {
    log: EventLog,
    failures: HashMap<String, i32>,
}

impl FakeExecutor {
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            failures: HashMap::new(),
        }
    }

    /// Make `cmd` exit with `code` whenever it runs.
    pub fn fail_on(mut self, cmd: &str, code: i32) -> Self {
        self.failures.insert(cmd.to_string(), code);
        self
    }

    /// Commands executed so far, in order.
    pub fn executed(&self) -> Vec<String> {
        executed_commands(&self.log)
    }
}

/// Extract the `run:` entries from a log.
pub fn executed_commands(log: &EventLog) -> Vec<String> {
    log.lock()
        .unwrap()
        .iter()
        .filter_map(|e| e.strip_prefix("run: ").map(str::to_string))
        .collect()
}

impl ExecutorBackend for FakeExecutor {
    fn run_command<'a>(
        &'a mut self,
        command: &'a TaskCommand,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + 'a>> {
        self.log
            .lock()
            .unwrap()
            .push(format!("run: {}", command.cmd));

        let outcome = match self.failures.get(&command.cmd) {
            Some(code) => CommandOutcome::Failed(*code),
            None => CommandOutcome::Success,
        };

        let result: Result<CommandOutcome> = Ok(outcome);
        Box::pin(std::future::ready(result))
    }
}

/// Echo writer that appends each echoed line to an [`EventLog`].
pub struct LogWriter {
    log: EventLog,
    buf: Vec<u8>,
}

impl LogWriter {
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            buf: Vec::new(),
        }
    }
}

impl Write for LogWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        while let Some(pos) = self.buf.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buf.drain(..=pos).collect();
            let text = String::from_utf8_lossy(&line[..line.len() - 1]).into_owned();
            self.log.lock().unwrap().push(format!("echo: {text}"));
        }
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
