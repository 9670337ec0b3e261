//! Error types for diary

use thiserror::Error;

/// Main error type for the diary application
#[derive(Debug, Error)]
pub enum DiaryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Invalid emotion: '{0}'. Valid emotions are: Happy, Sad, Neutral")]
    InvalidEmotion(String),

    #[error("Please fill in all fields!")]
    EmptyContent,

    #[error("You must be logged in to do that")]
    NotLoggedIn,
}

impl DiaryError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DiaryError::Config(_) | DiaryError::TomlDeserialize(_) => 2,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DiaryError::InvalidEmotion(_) => {
                format!(
                    "{}\n\n\
                    Emotions are not case-sensitive, e.g. 'happy' or 'SAD'.",
                    self
                )
            }
            DiaryError::EmptyContent => {
                format!(
                    "{}\n\n\
                    Write at least one non-blank character of content.",
                    self
                )
            }
            DiaryError::Config(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check the path given with --config or DIARY_CONFIG\n\
                    • Valid keys are: separator, log_level",
                    msg
                )
            }
            DiaryError::TomlDeserialize(_) => {
                format!(
                    "{}\n\n\
                    Valid keys are: separator, log_level\n\
                    Example: separator = \"~~~\"",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DiaryError
pub type Result<T> = std::result::Result<T, DiaryError>;
