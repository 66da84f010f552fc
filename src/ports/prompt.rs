use crate::domain::AppError;

/// Interactive question-asking capability used by the option resolver.
pub trait PromptPort {
    /// Present a single-choice list with a pre-selected default and return the
    /// chosen item.
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<String, AppError>;

    /// Ask a yes/no question with a pre-selected default.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, AppError>;
}
