use std::fmt;

/// Build environment passed to the external CLI via `--env.env`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// All environments, in prompt order.
    pub const ALL: [Environment; 2] = [Environment::Production, Environment::Development];

    /// Token used on the command line and in prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    /// Parse an environment from its command-line token.
    pub fn parse(name: &str) -> Option<Environment> {
        match name {
            "development" => Some(Environment::Development),
            "production" => Some(Environment::Production),
            _ => None,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
