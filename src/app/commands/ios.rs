use colored::Colorize;

use crate::app::AppContext;
use crate::app::commands::{cleaner, resolver};
use crate::domain::{AppError, CliOptions, Platform, command_line};
use crate::ports::{PromptPort, ShellPort};

/// iOS-only flow: resolve the iPhone selection, clean when the flag asks for
/// it, then hand the run command to the external CLI.
pub fn execute<P: PromptPort, S: ShellPort>(
    ctx: &AppContext<P, S>,
    options: CliOptions,
) -> Result<i32, AppError> {
    let config = resolver::resolve_ios(ctx.prompter(), &options)?;

    if config.clean {
        let exit_code = cleaner::clean(ctx.shell(), Platform::Ios)?;
        if exit_code != 0 {
            return Ok(exit_code);
        }
    }

    let command = command_line::ios_run_command(&config);
    println!("😊 {}{}", "[Running command]: ".green(), command);
    ctx.shell().run(&command)
}
