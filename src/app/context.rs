use crate::ports::{PromptPort, ShellPort};

/// Application context holding dependencies for command execution.
pub struct AppContext<P: PromptPort, S: ShellPort> {
    prompter: P,
    shell: S,
}

impl<P: PromptPort, S: ShellPort> AppContext<P, S> {
    /// Create a new application context.
    pub fn new(prompter: P, shell: S) -> Self {
        Self { prompter, shell }
    }

    /// Get a reference to the prompt port.
    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Get a reference to the shell port.
    pub fn shell(&self) -> &S {
        &self.shell
    }
}
