use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{CommandOutput, ShellPort};

/// Shell double recording every command it is handed. Exit codes for `run`
/// calls and the probe's error stream are scripted per test; unscripted runs
/// succeed.
pub struct FakeShell {
    commands: Mutex<Vec<String>>,
    exit_codes: Mutex<Vec<i32>>,
    captured_stderr: String,
}

impl FakeShell {
    pub fn new() -> Self {
        Self::with_exit_codes(&[])
    }

    pub fn with_exit_codes(codes: &[i32]) -> Self {
        Self {
            commands: Mutex::new(Vec::new()),
            exit_codes: Mutex::new(codes.to_vec()),
            captured_stderr: String::new(),
        }
    }

    pub fn with_captured_stderr(stderr: &str) -> Self {
        Self { captured_stderr: stderr.to_string(), ..Self::new() }
    }

    /// Every command handed to the shell, streaming and captured alike, in
    /// order.
    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }
}

impl Default for FakeShell {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellPort for FakeShell {
    fn lookup(&self, _program: &str) -> bool {
        true
    }

    fn run(&self, command: &str) -> Result<i32, AppError> {
        self.commands.lock().unwrap().push(command.to_string());
        let mut codes = self.exit_codes.lock().unwrap();
        Ok(if codes.is_empty() { 0 } else { codes.remove(0) })
    }

    fn run_captured(&self, command: &str) -> Result<CommandOutput, AppError> {
        self.commands.lock().unwrap().push(command.to_string());
        Ok(CommandOutput {
            status: 0,
            stdout: String::new(),
            stderr: self.captured_stderr.clone(),
        })
    }
}
