use colored::Colorize;

use crate::domain::{AppError, Platform, command_line};
use crate::ports::ShellPort;

/// Run the platform's clean steps in order, reporting each step's start and
/// completion. Returns the first non-zero exit code, or 0 when every step
/// succeeded. Completed steps are not rolled back on a later failure.
pub fn clean<S: ShellPort>(shell: &S, platform: Platform) -> Result<i32, AppError> {
    println!("🧹 {}Start Cleaning", "[Cleaner]: ".blue());

    for step in command_line::clean_steps(platform) {
        println!("🧹 {}Start {}", "[Cleaner]: ".blue(), step.label);

        let exit_code = shell.run(step.command)?;
        if exit_code != 0 {
            return Ok(exit_code);
        }

        println!("🧹 {}Finish {}", "[Cleaner]: ".blue(), step.label);
    }

    Ok(0)
}
