use colored::Colorize;

use crate::app::AppContext;
use crate::app::commands::{cleaner, resolver};
use crate::domain::{AppError, CliOptions, command_line};
use crate::ports::{PromptPort, ShellPort};

/// Generic Android/iOS flow: probe devices, resolve options, clean when
/// requested, then hand the run command to the external CLI. The returned
/// exit code mirrors the last external command.
pub fn execute<P: PromptPort, S: ShellPort>(
    ctx: &AppContext<P, S>,
    options: CliOptions,
) -> Result<i32, AppError> {
    print_available_android_devices(ctx.shell())?;

    let mut config = resolver::resolve(ctx.prompter(), &options)?;
    if !options.skip {
        config.clean = resolver::resolve_clean(ctx.prompter(), &options)?;
    }

    if config.clean {
        let exit_code = cleaner::clean(ctx.shell(), config.platform)?;
        if exit_code != 0 {
            return Ok(exit_code);
        }
    }

    let command = command_line::run_command(&config);
    println!("😊 {}{}", "[Running command]: ".green(), command);
    ctx.shell().run(&command)
}

/// Pre-flight probe listing available Android devices. The probe's error
/// stream is echoed with all dashes stripped; its exit status is ignored.
fn print_available_android_devices<S: ShellPort>(shell: &S) -> Result<(), AppError> {
    let output = shell.run_captured(command_line::ANDROID_DEVICES_PROBE)?;
    println!("{}", output.stderr.replace('-', ""));
    Ok(())
}
