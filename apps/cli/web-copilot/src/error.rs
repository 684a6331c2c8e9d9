use common::ErrorLocation;

use serde::Serialize;
use thiserror::Error;

/// Errors that stop a command.
///
/// A failed query is not one of these: it is an outcome, rendered by the
/// command like an answer.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum CopilotError {
    /// Error from this App
    #[error("Copilot Error: {message} {location}")]
    Copilot {
        message: String,
        location: ErrorLocation,
    },

    /// Error from copilot-core (config, credentials, transport setup)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    /// Required input was missing or unreadable
    #[error("Input Error: {message} {location}")]
    Input {
        message: String,
        location: ErrorLocation,
    },
}

impl CopilotError {
    #[track_caller]
    pub fn input(message: impl Into<String>) -> Self {
        CopilotError::Input {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn copilot(message: impl Into<String>) -> Self {
        CopilotError::Copilot {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }
}

impl From<copilot_core::error::CoreError> for CopilotError {
    #[track_caller]
    fn from(error: copilot_core::error::CoreError) -> Self {
        CopilotError::Core {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}

impl From<copilot_core::error::ConfigError> for CopilotError {
    #[track_caller]
    fn from(error: copilot_core::error::ConfigError) -> Self {
        CopilotError::from(copilot_core::error::CoreError::from(error))
    }
}

impl From<copilot_core::error::CredentialError> for CopilotError {
    #[track_caller]
    fn from(error: copilot_core::error::CredentialError) -> Self {
        CopilotError::from(copilot_core::error::CoreError::from(error))
    }
}

impl From<copilot_core::error::TransportError> for CopilotError {
    #[track_caller]
    fn from(error: copilot_core::error::TransportError) -> Self {
        CopilotError::from(copilot_core::error::CoreError::from(error))
    }
}
