use dialoguer::{Confirm, Select};

use crate::domain::AppError;
use crate::ports::PromptPort;

/// Terminal prompts backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompt;

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl PromptPort for DialoguerPrompt {
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<String, AppError> {
        let selection = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(|err| AppError::Prompt(format!("Failed to read selection: {}", err)))?;

        Ok(items[selection].to_string())
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, AppError> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|err| AppError::Prompt(format!("Failed to read answer: {}", err)))
    }
}
