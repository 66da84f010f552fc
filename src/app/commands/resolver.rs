//! Interactive option resolution.
//!
//! Each field follows the same precedence: explicit flag value, then
//! interactive answer, then hard default. Skip mode (`-d`) never reaches the
//! prompt port.

use crate::domain::run_config::{self, RunConfig};
use crate::domain::{AppError, CliOptions, Environment, ModelVariant, Platform};
use crate::ports::PromptPort;

const SYSTEM_PROMPT: &str = "Please choose which system to use";
const MOBILE_PROMPT: &str = "Please choose which mobile to use";
const VERSION_PROMPT: &str = "Please choose which mobile version to use";
const ENVIRONMENT_GATE_PROMPT: &str = "Do you want to choose the environment";
const ENVIRONMENT_PROMPT: &str = "Which environment you want";
const RUN_OPTION_PROMPT: &str = "Choose a run option";

const CLEAN_AND_RUN: &str = "Clean and Run";

const IOS_MOBILE_CHOICES: [&str; 4] = ["11", "12", "13", run_config::SKIP_SENTINEL];

/// Emulator profiles offered for Android runs.
const ANDROID_MOBILE_CHOICES: [&str; 4] =
    ["Pixel_3_XL_API_32", "Pixel_4_API_28", "Pixel_4_API_31", run_config::SKIP_SENTINEL];

/// Resolve options for the generic Android/iOS flow into a complete
/// configuration.
pub fn resolve<P: PromptPort>(prompter: &P, options: &CliOptions) -> Result<RunConfig, AppError> {
    if options.skip {
        // Skip mode forces the platform and environment defaults even when
        // their flags were passed; only the device selection flags carry
        // through.
        return Ok(RunConfig {
            platform: Platform::Ios,
            mobile: run_config::device_request(options.mobile.clone()),
            version: options.version.unwrap_or(ModelVariant::Normal),
            environment: Environment::Development,
            clean: options.clean,
        });
    }

    let platform = resolve_platform(prompter, options)?;
    let mobile = resolve_mobile(prompter, options, platform)?;
    let version = resolve_version(prompter, options, platform, mobile.as_deref())?;
    let environment = resolve_environment(prompter, options)?;

    Ok(RunConfig { platform, mobile, version, environment, clean: options.clean })
}

/// Resolve options for the iOS-only flow. Platform and environment are fixed,
/// and the device prompt has no skip choice.
pub fn resolve_ios<P: PromptPort>(
    prompter: &P,
    options: &CliOptions,
) -> Result<RunConfig, AppError> {
    let mobile = if options.skip {
        run_config::device_request(
            options.mobile.clone().or_else(|| Some(run_config::DEFAULT_IOS_MOBILE.to_string())),
        )
    } else {
        match &options.mobile {
            Some(token) => run_config::device_request(Some(token.clone())),
            None => Some(prompter.select(MOBILE_PROMPT, &["11", "12", "13"], 0)?),
        }
    };

    let version = if options.skip {
        options.version.unwrap_or(ModelVariant::Normal)
    } else {
        resolve_version(prompter, options, Platform::Ios, mobile.as_deref())?
    };

    Ok(RunConfig {
        platform: Platform::Ios,
        mobile,
        version,
        environment: Environment::Development,
        clean: options.clean,
    })
}

/// Ask for the run option and combine it with the `--clean` flag. Only the
/// generic flow asks this; skip mode takes the flag as-is.
pub fn resolve_clean<P: PromptPort>(
    prompter: &P,
    options: &CliOptions,
) -> Result<bool, AppError> {
    let answer = prompter.select(RUN_OPTION_PROMPT, &[CLEAN_AND_RUN, "Run"], 1)?;
    Ok(options.clean || answer == CLEAN_AND_RUN)
}

fn resolve_platform<P: PromptPort>(
    prompter: &P,
    options: &CliOptions,
) -> Result<Platform, AppError> {
    // Gating quirk carried from the original tool: only both platform flags
    // together suppress the prompt. A lone flag still shows it, but wins over
    // the answer below.
    let answer = if options.platform_prompt_suppressed() {
        None
    } else {
        let items: Vec<&str> = Platform::ALL.iter().map(Platform::as_str).collect();
        let selected = prompter.select(SYSTEM_PROMPT, &items, 1)?;
        Platform::parse(&selected)
    };

    Ok(run_config::merge(options.platform(), answer, Platform::Ios))
}

fn resolve_mobile<P: PromptPort>(
    prompter: &P,
    options: &CliOptions,
    platform: Platform,
) -> Result<Option<String>, AppError> {
    if options.mobile.is_some() {
        return Ok(run_config::device_request(options.mobile.clone()));
    }

    let items: &[&str] = match platform {
        Platform::Ios => &IOS_MOBILE_CHOICES,
        Platform::Android => &ANDROID_MOBILE_CHOICES,
    };

    let answer = prompter.select(MOBILE_PROMPT, items, items.len() - 1)?;
    Ok(run_config::device_request(Some(answer)))
}

fn resolve_version<P: PromptPort>(
    prompter: &P,
    options: &CliOptions,
    platform: Platform,
    mobile: Option<&str>,
) -> Result<ModelVariant, AppError> {
    if let Some(version) = options.version {
        return Ok(version);
    }

    let (Platform::Ios, Some(mobile)) = (platform, mobile) else {
        return Ok(ModelVariant::Normal);
    };

    let choices = ModelVariant::choices_for_mobile(mobile);
    let items: Vec<&str> = choices.iter().map(ModelVariant::as_str).collect();
    let answer = prompter.select(VERSION_PROMPT, &items, 0)?;

    Ok(ModelVariant::parse(&answer).unwrap_or(ModelVariant::Normal))
}

fn resolve_environment<P: PromptPort>(
    prompter: &P,
    options: &CliOptions,
) -> Result<Environment, AppError> {
    let answer = if options.environment_prompt_suppressed() {
        None
    } else if prompter.confirm(ENVIRONMENT_GATE_PROMPT, false)? {
        let items: Vec<&str> = Environment::ALL.iter().map(Environment::as_str).collect();
        let selected = prompter.select(ENVIRONMENT_PROMPT, &items, 1)?;
        Environment::parse(&selected)
    } else {
        None
    };

    Ok(run_config::merge(options.environment(), answer, Environment::Development))
}
