//! Test doubles for the prompt and shell ports.

mod fake_shell;
mod scripted_prompt;

pub(crate) use fake_shell::FakeShell;
pub(crate) use scripted_prompt::ScriptedPrompt;
