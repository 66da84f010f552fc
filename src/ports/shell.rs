use crate::domain::AppError;

/// Captured output of a silently executed command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// External process execution capability.
///
/// Implementations carry their working directory and search path as explicit
/// state; nothing is read from the process environment at call time.
pub trait ShellPort {
    /// Whether an executable is reachable on the configured search path.
    fn lookup(&self, program: &str) -> bool;

    /// Run a shell command, streaming its output to the terminal. Returns the
    /// command's exit code; spawning failures are errors, non-zero exits are
    /// not.
    fn run(&self, command: &str) -> Result<i32, AppError>;

    /// Run a shell command silently, capturing its output.
    fn run_captured(&self, command: &str) -> Result<CommandOutput, AppError>;
}
