use clap::Args;

use crate::domain::{AppError, CliOptions, ModelVariant};

/// Arguments for the iOS-only flow.
#[derive(Args, Debug)]
pub struct IosArgs {
    /// iPhone major version
    pub mobile: Option<String>,
    /// iPhone model variant: normal, mini, pro, or "pro max"
    pub version: Option<String>,
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

impl IosArgs {
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

        Ok(CliOptions { skip: self.skip, clean: self.clean, mobile, version, ..CliOptions::default() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcut_flags_map_onto_the_partial_configuration() {
        let parsed = IosArgs {
            mobile: None,
            version: None,
            eleven: false,
            twelve: false,
            thirteen: true,
            pro: true,
            pro_max: false,
            clean: true,
            skip: false,
        };

        let options = parsed.into_options().unwrap();
        assert_eq!(options.mobile.as_deref(), Some("13"));
        assert_eq!(options.version, Some(ModelVariant::Pro));
        assert!(options.clean);
        assert!(!options.ios && !options.android);
    }
}
