use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Raised when a secret is about to leave the process through a side door.
#[derive(Debug, ThisError)]
pub enum RedactError {
    #[error("Serialization Error: {message} {location}")]
    Serialization {
        message: String,
        location: ErrorLocation,
    },
}

impl RedactError {
    #[track_caller]
    pub fn serialization(message: impl Into<String>) -> Self {
        RedactError::Serialization {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }
}
