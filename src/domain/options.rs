use crate::domain::{Environment, ModelVariant, Platform};

/// Partial configuration parsed from the command line.
///
/// Fields mirror the flags one-to-one; nothing is defaulted at parse time.
/// Resolution to a complete [`crate::domain::RunConfig`] happens in the
/// interactive resolver.
#[derive(Debug, Clone, Default)]
pub struct CliOptions {
    /// `-d`: bypass all prompts, fall back to hard defaults.
    pub skip: bool,
    /// `--clean`/`-c`: clean before running.
    pub clean: bool,
    /// `--ios`
    pub ios: bool,
    /// `--android`
    pub android: bool,
    /// `--dev`/`--env-development`
    pub development: bool,
    /// `--prod`/`--env-production`
    pub production: bool,
    /// Device token from positional[0] or a `--11`/`--12`/`--13` shortcut.
    pub mobile: Option<String>,
    /// Model variant from positional[1] or a `--pro`/`--pro-max` shortcut.
    pub version: Option<ModelVariant>,
}

impl CliOptions {
    /// Platform pinned by flags: set only when exactly one platform flag was
    /// passed. Both or neither leave the field open for resolution.
    pub fn platform(&self) -> Option<Platform> {
        match (self.ios, self.android) {
            (true, false) => Some(Platform::Ios),
            (false, true) => Some(Platform::Android),
            _ => None,
        }
    }

    /// Environment pinned by flags, same exactly-one rule as [`platform`].
    ///
    /// [`platform`]: CliOptions::platform
    pub fn environment(&self) -> Option<Environment> {
        match (self.development, self.production) {
            (true, false) => Some(Environment::Development),
            (false, true) => Some(Environment::Production),
            _ => None,
        }
    }

    /// Whether the platform prompt is suppressed.
    ///
    /// Quirk carried over from the original tool: only passing BOTH platform
    /// flags suppresses the prompt. A single flag still shows it, although the
    /// flag value wins over the answer.
    pub fn platform_prompt_suppressed(&self) -> bool {
        self.ios && self.android
    }

    /// Whether the environment prompts are suppressed: any environment flag
    /// pins the field.
    pub fn environment_prompt_suppressed(&self) -> bool {
        self.development || self.production
    }

    /// Device token from the numbered shortcut flags.
    pub fn mobile_flag(eleven: bool, twelve: bool, thirteen: bool) -> Option<String> {
        if eleven {
            Some("11".to_string())
        } else if twelve {
            Some("12".to_string())
        } else if thirteen {
            Some("13".to_string())
        } else {
            None
        }
    }

    /// Model variant from the shortcut flags; `--pro-max` beats `--pro`.
    pub fn version_flag(pro: bool, pro_max: bool) -> Option<ModelVariant> {
        if pro_max {
            Some(ModelVariant::ProMax)
        } else if pro {
            Some(ModelVariant::Pro)
        } else {
            None
        }
    }
}
