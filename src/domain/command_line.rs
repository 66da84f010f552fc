//! Shell command synthesis for the external NativeScript CLI.
//!
//! Everything here is a pure rendering of a resolved configuration: same
//! configuration, same string, every time. The literal command text is
//! exactly what the external tool receives, including the doubled `=` in the
//! generic run command's env flag, which the tool has always been invoked
//! with.

use crate::domain::{Platform, RunConfig};

/// Executable this wrapper delegates to.
pub const NS_TOOL: &str = "ns";

/// Pre-flight probe listing available Android devices.
pub const ANDROID_DEVICES_PROBE: &str = "ns device android --available-devices";

/// One step of the clean sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanStep {
    pub command: &'static str,
    pub label: &'static str,
}

const SHUTDOWN_SIMULATORS: CleanStep =
    CleanStep { command: "xcrun simctl shutdown all", label: "Clean Old Xcode Simulators" };

const CLEAN_PROJECT: CleanStep = CleanStep { command: "ns clean", label: "Cleaning Project" };

/// Clean steps for a platform, in execution order. Simulator shutdown only
/// applies to iOS.
pub fn clean_steps(platform: Platform) -> &'static [CleanStep] {
    match platform {
        Platform::Ios => &[SHUTDOWN_SIMULATORS, CLEAN_PROJECT],
        Platform::Android => &[CLEAN_PROJECT],
    }
}

/// Run command for the generic Android/iOS flow.
pub fn run_command(config: &RunConfig) -> String {
    let mut command =
        format!("ns run {} --no-hmr --env.env=={}", config.platform, config.environment);
    push_device_clause(&mut command, config);
    command
}

/// Run command for the iOS-only flow: platform and environment are fixed, and
/// the env flag uses a single `=`.
pub fn ios_run_command(config: &RunConfig) -> String {
    let mut command = String::from("ns run ios --no-hmr --env.env=development");
    push_device_clause(&mut command, config);
    command
}

fn push_device_clause(command: &mut String, config: &RunConfig) {
    if let Some(device) = device_expression(config) {
        command.push_str(" --device '");
        command.push_str(&device);
        command.push('\'');
    }
}

/// Device expression identifying the target simulator/emulator, if any.
pub fn device_expression(config: &RunConfig) -> Option<String> {
    let mobile = config.mobile.as_deref()?;
    Some(match config.platform {
        Platform::Ios => format!("iPhone {}{}", mobile, config.version.device_suffix()),
        Platform::Android => mobile.to_string(),
    })
}
