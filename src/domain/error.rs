use std::io;

use thiserror::Error;

/// Library-wide error type for nsr operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Required external CLI is not installed.
    #[error("Sorry, you may need to install {0} first!")]
    MissingTool(String),

    /// Version token is not a known iPhone model variant.
    #[error("Invalid version '{0}': must be one of normal, mini, pro, pro max")]
    InvalidVersion(String),

    /// Interactive prompt failed or was cancelled.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// External command could not be spawned.
    #[error("Failed to run '{command}': {details}")]
    Shell { command: String, details: String },
}
