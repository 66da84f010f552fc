use std::fmt;

/// Target mobile platform for the run command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    /// All platforms, in prompt order.
    pub const ALL: [Platform; 2] = [Platform::Android, Platform::Ios];

    /// Token used on the `ns run` command line and in prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }

    /// Parse a platform from its command-line token.
    pub fn parse(name: &str) -> Option<Platform> {
        match name {
            "ios" => Some(Platform::Ios),
            "android" => Some(Platform::Android),
            _ => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
