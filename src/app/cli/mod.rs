//! CLI Adapter.

mod ios;
mod run;

use clap::{Parser, Subcommand};

use crate::app::{AppContext, commands};
use crate::domain::{AppError, command_line};
use crate::ports::ShellPort;
use crate::services::{DialoguerPrompt, SystemShell};

#[derive(Parser)]
#[command(name = "nsr")]
#[command(version)]
#[command(
    about = "Clean and run NativeScript apps on simulators, emulators, and devices",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the app on Android or iOS
    #[clap(visible_alias = "r")]
    Run(run::RunArgs),
    /// Run the app on iOS with the iPhone-only option set
    #[clap(visible_alias = "i")]
    Ios(ios::IosArgs),
}

/// Entry point for the CLI.
pub fn run() {
    match execute() {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn execute() -> Result<i32, AppError> {
    let shell = SystemShell::from_env()?;

    // The tool check precedes argument parsing: no invocation proceeds
    // without the external CLI installed.
    if !shell.lookup(command_line::NS_TOOL) {
        return Err(AppError::MissingTool("nativescript".to_string()));
    }

    let cli = Cli::parse();
    let ctx = AppContext::new(DialoguerPrompt::new(), shell);

    match cli.command {
        Commands::Run(args) => commands::run::execute(&ctx, args.into_options()?),
        Commands::Ios(args) => commands::ios::execute(&ctx, args.into_options()?),
    }
}
