use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::AppError;
use crate::ports::{CommandOutput, ShellPort};

/// Shell-command runner over `sh -c`.
///
/// The working directory and executable search path are captured once at
/// construction and passed to every child process explicitly.
#[derive(Debug, Clone)]
pub struct SystemShell {
    cwd: PathBuf,
    search_path: OsString,
}

impl SystemShell {
    pub fn new(cwd: PathBuf, search_path: OsString) -> Self {
        Self { cwd, search_path }
    }

    /// Capture the invoking process's working directory and `PATH`.
    pub fn from_env() -> Result<Self, AppError> {
        let cwd = env::current_dir()?;
        let search_path = env::var_os("PATH").unwrap_or_default();
        Ok(Self::new(cwd, search_path))
    }

    fn command(&self, command: &str) -> Command {
        let mut child = Command::new("sh");
        child.arg("-c").arg(command).current_dir(&self.cwd).env("PATH", &self.search_path);
        child
    }

    fn spawn_error(command: &str, err: std::io::Error) -> AppError {
        AppError::Shell { command: command.to_string(), details: err.to_string() }
    }
}

impl ShellPort for SystemShell {
    fn lookup(&self, program: &str) -> bool {
        env::split_paths(&self.search_path).any(|dir| is_executable(&dir.join(program)))
    }

    fn run(&self, command: &str) -> Result<i32, AppError> {
        let status =
            self.command(command).status().map_err(|err| Self::spawn_error(command, err))?;

        // A signal-terminated child carries no code; report it as a plain
        // failure.
        Ok(status.code().unwrap_or(1))
    }

    fn run_captured(&self, command: &str) -> Result<CommandOutput, AppError> {
        let output = self
            .command(command)
            .stdin(Stdio::null())
            .output()
            .map_err(|err| Self::spawn_error(command, err))?;

        Ok(CommandOutput {
            status: output.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.is_file()
        && std::fs::metadata(path)
            .map(|meta| meta.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[cfg(unix)]
    fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn lookup_finds_executables_on_the_configured_path_only() {
        let dir = tempfile::tempdir().unwrap();
        write_script(dir.path(), "fake-tool", "#!/bin/sh\nexit 0\n");

        let shell =
            SystemShell::new(dir.path().to_path_buf(), dir.path().as_os_str().to_os_string());
        assert!(shell.lookup("fake-tool"));
        assert!(!shell.lookup("sh"));
    }

    #[cfg(unix)]
    #[test]
    fn lookup_ignores_non_executable_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("fake-tool"), "not a program").unwrap();

        let shell =
            SystemShell::new(dir.path().to_path_buf(), dir.path().as_os_str().to_os_string());
        assert!(!shell.lookup("fake-tool"));
    }

    #[test]
    fn run_captured_reports_exit_code_and_streams() {
        let dir = tempfile::tempdir().unwrap();
        let shell = SystemShell::new(
            dir.path().to_path_buf(),
            env::var_os("PATH").unwrap_or_default(),
        );

        let output = shell.run_captured("echo out; echo err 1>&2; exit 3").unwrap();
        assert_eq!(output.status, 3);
        assert_eq!(output.stdout.trim(), "out");
        assert_eq!(output.stderr.trim(), "err");
    }

    #[test]
    fn run_returns_the_exit_code_without_erroring() {
        let dir = tempfile::tempdir().unwrap();
        let shell = SystemShell::new(
            dir.path().to_path_buf(),
            env::var_os("PATH").unwrap_or_default(),
        );

        assert_eq!(shell.run("exit 0").unwrap(), 0);
        assert_eq!(shell.run("exit 5").unwrap(), 5);
    }
}
