use crate::domain::{Environment, ModelVariant, Platform};

/// Device token meaning "run on the default simulator/emulator with no
/// explicit device selection".
pub const SKIP_SENTINEL: &str = "skip";

/// Hard default device token for the iOS-only flow.
pub const DEFAULT_IOS_MOBILE: &str = "11";

/// Fully resolved run configuration, consumed exactly once by the command
/// synthesizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub platform: Platform,
    /// `None` means no explicit device selection.
    pub mobile: Option<String>,
    pub version: ModelVariant,
    pub environment: Environment,
    pub clean: bool,
}

/// Precedence rule shared by every field: an explicit flag value beats the
/// interactive answer, which beats the hard default.
pub fn merge<T>(flag: Option<T>, answer: Option<T>, default: T) -> T {
    flag.or(answer).unwrap_or(default)
}

/// Normalize a device token: the `skip` sentinel, whether typed as a
/// positional or picked in a prompt, means no explicit device selection.
pub fn device_request(token: Option<String>) -> Option<String> {
    token.filter(|value| value != SKIP_SENTINEL)
}
