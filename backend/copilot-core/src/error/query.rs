//! Internal failure type of a single question/answer round trip.
//!
//! Every variant maps onto exactly one [`crate::FailureKind`]; the
//! conversion into [`crate::QueryOutcome`] lives in `outcome.rs`.

use crate::error::TransportError;

use common::{ErrorLocation, HttpStatusCode};

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum QueryError {
    #[error("Missing Credential Error: {message} {location}")]
    MissingCredential {
        message: String,
        location: ErrorLocation,
    },

    #[error("Transport Error: {message} {location}")]
    Transport {
        message: String,
        is_timeout: bool,
        location: ErrorLocation,
    },

    #[error("HTTP Error: {status_code} - {message} {location}")]
    Http {
        status_code: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed Response Error: {message} {location}")]
    MalformedResponse {
        message: String,
        location: ErrorLocation,
    },
}

impl QueryError {
    #[track_caller]
    pub fn missing_credential(message: impl Into<String>) -> Self {
        QueryError::MissingCredential {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn http(status_code: HttpStatusCode, message: impl Into<String>) -> Self {
        QueryError::Http {
            status_code,
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn malformed(message: impl Into<String>) -> Self {
        QueryError::MalformedResponse {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    /// Message without the location suffix.
    pub fn message(&self) -> &str {
        match self {
            QueryError::MissingCredential { message, .. } => message,
            QueryError::Transport { message, .. } => message,
            QueryError::Http { message, .. } => message,
            QueryError::MalformedResponse { message, .. } => message,
        }
    }

    pub fn location(&self) -> ErrorLocation {
        match self {
            QueryError::MissingCredential { location, .. } => *location,
            QueryError::Transport { location, .. } => *location,
            QueryError::Http { location, .. } => *location,
            QueryError::MalformedResponse { location, .. } => *location,
        }
    }
}

impl From<TransportError> for QueryError {
    #[track_caller]
    fn from(error: TransportError) -> Self {
        QueryError::Transport {
            is_timeout: error.is_timeout(),
            message: error.message().to_string(),
            location: ErrorLocation::caller(),
        }
    }
}

impl From<serde_json::Error> for QueryError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        QueryError::MalformedResponse {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}
