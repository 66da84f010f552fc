use clap::Args;

use crate::domain::{AppError, CliOptions, ModelVariant};

/// Arguments for the generic Android/iOS flow.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Device token: an iPhone major version, an Android emulator profile, or "skip"
    pub mobile: Option<String>,
    /// iPhone model variant: normal, mini, pro, or "pro max"
    pub version: Option<String>,
    /// Target Android
    #[arg(long)]
    pub android: bool,
    /// Target iOS
    #[arg(long)]
    pub ios: bool,
    /// Use the development environment
    #[arg(long = "dev", alias = "env-development")]
    pub development: bool,
    /// Use the production environment
    #[arg(long = "prod", alias = "env-production")]
    pub production: bool,
    /// Shortcut for iPhone 11
    #[arg(long = "11")]
    pub eleven: bool,
    /// Shortcut for iPhone 12
    #[arg(long = "12")]
    pub twelve: bool,
    /// Shortcut for iPhone 13
    #[arg(long = "13")]
    pub thirteen: bool,
    /// Shortcut for the Pro model variant
    #[arg(long)]
    pub pro: bool,
    /// Shortcut for the Pro Max model variant
    #[arg(long = "pro-max")]
    pub pro_max: bool,
    /// Clean before running
    #[arg(short = 'c', long)]
    pub clean: bool,
    /// Skip all prompts and use defaults
    #[arg(short = 'd')]
    pub skip: bool,
}

impl RunArgs {
    /// Map the parsed flags onto a partial configuration. Positionals beat
    /// their shortcut flags.
    pub fn into_options(self) -> Result<CliOptions, AppError> {
        let mobile = self
            .mobile
            .or_else(|| CliOptions::mobile_flag(self.eleven, self.twelve, self.thirteen));

        let version = match self.version {
            Some(token) => {
                Some(ModelVariant::parse(&token).ok_or(AppError::InvalidVersion(token))?)
            }
            None => CliOptions::version_flag(self.pro, self.pro_max),
        };

        Ok(CliOptions {
            skip: self.skip,
            clean: self.clean,
            ios: self.ios,
            android: self.android,
            development: self.development,
            production: self.production,
            mobile,
            version,
        })
    }
}
