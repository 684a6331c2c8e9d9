//! The completion API credential, held so it cannot leak by accident.

use crate::RedactError;

use std::fmt;

use serde::ser::Error;
use zeroize::Zeroize;

/// Marker substituted for the key wherever it would otherwise appear in text.
pub const REDACTION_MARKER: &str = "[REDACTED]";

/// An API key that never exposes its value in logs or debug output.
#[derive(Clone)]
pub struct RedactedApiKey {
    inner: String,
}

impl RedactedApiKey {
    /// Create a new redacted API key.
    pub fn new(key: String) -> Self {
        Self { inner: key }
    }

    /// Wrap the trimmed form of `key`, or `None` when nothing is left.
    pub fn from_trimmed(key: &str) -> Option<Self> {
        let trimmed = key.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self::new(trimmed.to_string()))
        }
    }

    /// Get the actual key value for transmission.
    ///
    /// # Security Note
    /// Only call this when building the `Authorization` header or
    /// persisting the key to the settings store.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Get the key length (safe to log).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if the key is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Empty or whitespace only.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.inner.trim().is_empty()
    }

    /// Replace every occurrence of the key in `text` with [`REDACTION_MARKER`].
    pub fn scrub(&self, text: &str) -> String {
        if self.is_blank() {
            return text.to_string();
        }
        text.replace(self.inner.as_str(), REDACTION_MARKER)
    }
}

impl fmt::Debug for RedactedApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RedactedApiKey([REDACTED])")
    }
}

impl fmt::Display for RedactedApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED API KEY]")
    }
}

impl Drop for RedactedApiKey {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

// Prevent accidental serialization
impl serde::Serialize for RedactedApiKey {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(S::Error::custom(RedactError::serialization(
            "RedactedApiKey cannot be serialized - use as_str() explicitly",
        )))
    }
}
