use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::PromptPort;

/// One recorded question, with the choice list and the pre-selected default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub items: Vec<String>,
    pub default: String,
}

/// Prompt double replaying scripted answers in order and recording every
/// question. When the script runs dry, prompts fall back to their declared
/// default, like a user pressing enter.
pub struct ScriptedPrompt {
    answers: Mutex<Vec<String>>,
    questions: Mutex<Vec<Question>>,
}

impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|answer| answer.to_string()).collect()),
            questions: Mutex::new(Vec::new()),
        }
    }

    /// A prompt double expected to answer nothing but defaults.
    pub fn silent() -> Self {
        Self::new(&[])
    }

    pub fn questions(&self) -> Vec<Question> {
        self.questions.lock().unwrap().clone()
    }

    pub fn question_count(&self) -> usize {
        self.questions.lock().unwrap().len()
    }

    fn record(&self, prompt: &str, items: &[&str], default: &str) {
        self.questions.lock().unwrap().push(Question {
            prompt: prompt.to_string(),
            items: items.iter().map(|item| item.to_string()).collect(),
            default: default.to_string(),
        });
    }

    fn next_answer(&self) -> Option<String> {
        let mut answers = self.answers.lock().unwrap();
        if answers.is_empty() { None } else { Some(answers.remove(0)) }
    }
}

impl PromptPort for ScriptedPrompt {
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<String, AppError> {
        self.record(prompt, items, items[default]);
        Ok(self.next_answer().unwrap_or_else(|| items[default].to_string()))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, AppError> {
        self.record(prompt, &["yes", "no"], if default { "yes" } else { "no" });
        Ok(self
            .next_answer()
            .map(|answer| answer.eq_ignore_ascii_case("yes"))
            .unwrap_or(default))
    }
}
