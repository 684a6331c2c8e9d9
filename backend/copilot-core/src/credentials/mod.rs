//! Where the completion API key lives.
//!
//! The query service only ever calls [`CredentialSource::get`]; `set`
//! exists for the settings surface that lets the user store a key.

mod file_store;

pub use file_store::FileCredentialStore;

use crate::error::CredentialError;

use common::RedactedApiKey;

use std::sync::{Arc, Mutex};

pub trait CredentialSource: Send + Sync {
    /// The stored key, or `None` when nothing usable is stored.
    fn get(&self) -> Result<Option<RedactedApiKey>, CredentialError>;

    /// Replace the stored key.
    fn set(&self, value: RedactedApiKey) -> Result<(), CredentialError>;
}

impl<T: CredentialSource + ?Sized> CredentialSource for Arc<T> {
    fn get(&self) -> Result<Option<RedactedApiKey>, CredentialError> {
        (**self).get()
    }

    fn set(&self, value: RedactedApiKey) -> Result<(), CredentialError> {
        (**self).set(value)
    }
}

/// Process-local store, for embedding hosts and tests.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    key: Mutex<Option<RedactedApiKey>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `key` trimmed; a blank key leaves the store empty.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: Mutex::new(RedactedApiKey::from_trimmed(&key.into())),
        }
    }
}

impl CredentialSource for InMemoryCredentialStore {
    fn get(&self) -> Result<Option<RedactedApiKey>, CredentialError> {
        let guard = self
            .key
            .lock()
            .map_err(|_| CredentialError::store("credential lock poisoned"))?;
        Ok(guard.clone())
    }

    fn set(&self, value: RedactedApiKey) -> Result<(), CredentialError> {
        let key = RedactedApiKey::from_trimmed(value.as_str()).ok_or_else(|| CredentialError::empty())?;
        let mut guard = self
            .key
            .lock()
            .map_err(|_| CredentialError::store("credential lock poisoned"))?;
        *guard = Some(key);
        Ok(())
    }
}
