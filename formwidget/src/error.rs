//! Error types

use thiserror::Error;

/// Errors raised while building widget options.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required option was not supplied.
    #[error("Missing required option '{0}'")]
    MissingOption(&'static str),

    /// The option name is not known to the widget.
    #[error("Unknown option '{0}'")]
    UnknownOption(String),

    /// The option is known but its value cannot be used.
    #[error("Invalid value for option '{option}': {reason}")]
    InvalidOption {
        option: &'static str,
        reason: String,
    },

    /// The option document could not be parsed.
    #[error("Malformed options: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn invalid(option: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            option,
            reason: reason.into(),
        }
    }
}

/// Error returned by a lazy choice loader.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LoadError {
    message: String,
}

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors raised while rendering a widget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The lazy choice loader failed.
    #[error("Failed to load choices: {0}")]
    Choices(#[from] LoadError),
}
