//! Errors raised before an HTTP response exists.
//!
//! A response with a failing status is not a transport error; it is
//! handed back to the caller as a [`crate::TransportResponse`].

use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum TransportError {
    #[error("Network Error: {message} {location}")]
    Network {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    #[error("Client Build Error: {message} {location}")]
    ClientBuild {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid Request Error: {message} {location}")]
    InvalidRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl TransportError {
    /// Create from reqwest error with proper categorization.
    #[track_caller]
    pub fn from_reqwest(error: &reqwest::Error) -> Self {
        // Check for specific error types BEFORE converting to string
        let is_timeout = error.is_timeout();
        let is_connection = error.is_connect();

        if error.is_builder() {
            return TransportError::InvalidRequest {
                message: error.to_string(),
                location: ErrorLocation::caller(),
            };
        }

        TransportError::Network {
            message: error.to_string(),
            is_timeout,
            is_connection,
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn network(message: impl Into<String>) -> Self {
        TransportError::Network {
            message: message.into(),
            is_timeout: false,
            is_connection: false,
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        TransportError::InvalidRequest {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn connection_refused(message: impl Into<String>) -> Self {
        TransportError::Network {
            message: message.into(),
            is_timeout: false,
            is_connection: true,
            location: ErrorLocation::caller(),
        }
    }

    /// Message without the location suffix, suitable for an outcome detail.
    pub fn message(&self) -> &str {
        match self {
            TransportError::Network { message, .. } => message,
            TransportError::ClientBuild { message, .. } => message,
            TransportError::InvalidRequest { message, .. } => message,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Network { is_timeout: true, .. })
    }
}

impl From<reqwest::Error> for TransportError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        TransportError::from_reqwest(&error)
    }
}
