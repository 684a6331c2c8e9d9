//! Errors raised by credential stores.
//!
//! Messages describe the store, never the stored value.

use common::ErrorLocation;

use std::path::PathBuf;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum CredentialError {
    #[error("Credential Empty Error: Please enter an API key {location}")]
    Empty { location: ErrorLocation },

    #[error("Credential Read Error: {path}: {source} {location}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Credential Write Error: {path}: {source} {location}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Credential Format Error: {path}: {reason} {location}")]
    Format {
        path: PathBuf,
        reason: String,
        location: ErrorLocation,
    },

    #[error("Credential Store Error: {message} {location}")]
    Store {
        message: String,
        location: ErrorLocation,
    },
}

impl CredentialError {
    #[track_caller]
    pub fn empty() -> Self {
        CredentialError::Empty {
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn store(message: impl Into<String>) -> Self {
        CredentialError::Store {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }
}
