//! Shared testing utilities for nsr CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
///
/// Fake `ns` and `xcrun` executables live on a private search path and append
/// every invocation to a shared log, so tests can assert on the exact
/// commands and their order.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    bin_dir: PathBuf,
    work_dir: PathBuf,
    log_file: PathBuf,
    fail_file: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with fake tools installed.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let bin_dir = root.path().join("bin");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&bin_dir).expect("Failed to create fake bin directory");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        let log_file = root.path().join("calls.log");
        let fail_file = root.path().join("fail");

        let ns_script = format!(
            r#"#!/bin/sh
echo "ns $*" >> "{log}"
if [ -f "{fail}" ]; then
    read sub code < "{fail}"
    if [ "$1" = "$sub" ]; then
        exit "$code"
    fi
fi
if [ "$1" = "device" ]; then
    echo "Available devices----ready" 1>&2
fi
exit 0
"#,
            log = log_file.to_string_lossy(),
            fail = fail_file.to_string_lossy(),
        );

        let xcrun_script = format!(
            r#"#!/bin/sh
echo "xcrun $*" >> "{log}"
exit 0
"#,
            log = log_file.to_string_lossy(),
        );

        write_executable(&bin_dir.join("ns"), &ns_script);
        write_executable(&bin_dir.join("xcrun"), &xcrun_script);

        Self { root, bin_dir, work_dir, log_file, fail_file }
    }

    /// Build a command for invoking the compiled `nsr` binary with the fake
    /// tools on its search path.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("nsr").expect("Failed to locate nsr binary");
        cmd.current_dir(&self.work_dir)
            .env("PATH", format!("{}:/usr/bin:/bin", self.bin_dir.display()));
        cmd
    }

    /// Build a command whose search path holds no tools at all.
    pub fn cli_without_tools(&self) -> Command {
        let empty_dir = self.root.path().join("empty");
        fs::create_dir_all(&empty_dir).expect("Failed to create empty bin directory");

        let mut cmd = Command::cargo_bin("nsr").expect("Failed to locate nsr binary");
        cmd.current_dir(&self.work_dir).env("PATH", &empty_dir);
        cmd
    }

    /// Every fake-tool invocation so far, one command per line.
    pub fn invocation_log(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }

    /// Make the fake `ns` exit with `code` when invoked with `subcommand`.
    pub fn fail_subcommand(&self, subcommand: &str, code: i32) {
        fs::write(&self.fail_file, format!("{} {}\n", subcommand, code))
            .expect("Failed to write fail marker");
    }
}

fn write_executable(path: &std::path::Path, content: &str) {
    fs::write(path, content).expect("Failed to write fake tool script");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = fs::metadata(path).expect("Failed to stat fake tool").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms).expect("Failed to mark fake tool executable");
    }
}
