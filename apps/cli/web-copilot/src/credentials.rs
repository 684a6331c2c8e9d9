//! Credential lookup for the command line.
//!
//! The settings file written by `set-key` wins; `OPENAI_API_KEY` (from the
//! process environment or a `.env` file) is the fallback.

use copilot_core::error::CredentialError;
use copilot_core::{CredentialSource, FileCredentialStore};

use common::RedactedApiKey;

use std::env;
use std::path::PathBuf;

use log::{debug, info, warn};

pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

/// Result of attempting to load .env file.
#[derive(Debug)]
pub struct EnvLoadResult {
    /// Path to loaded .env file, if found.
    pub path: Option<PathBuf>,
    /// Whether any .env file was loaded.
    pub loaded: bool,
}

/// Attempts to load .env from the current directory, then the executable's.
pub fn try_load_dotenv() -> EnvLoadResult {
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded .env from: {:?}", path);
        return EnvLoadResult {
            path: Some(path),
            loaded: true,
        };
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let env_path = exe_dir.join(".env");
            if env_path.exists() {
                match dotenvy::from_path(&env_path) {
                    Ok(_) => {
                        info!("Loaded .env from: {:?}", env_path);
                        return EnvLoadResult {
                            path: Some(env_path),
                            loaded: true,
                        };
                    }
                    Err(e) => {
                        warn!("Failed to parse .env at {:?}: {}", env_path, e);
                    }
                }
            }
        }
    }

    EnvLoadResult {
        path: None,
        loaded: false,
    }
}

/// Settings file first, environment variable second.
#[derive(Debug, Clone)]
pub struct EnvFallbackCredentials {
    store: FileCredentialStore,
    env_var: String,
}

impl EnvFallbackCredentials {
    pub fn new(store: FileCredentialStore) -> Self {
        Self::with_env_var(store, API_KEY_ENV_VAR)
    }

    pub fn with_env_var(store: FileCredentialStore, env_var: impl Into<String>) -> Self {
        Self {
            store,
            env_var: env_var.into(),
        }
    }

    pub fn store(&self) -> &FileCredentialStore {
        &self.store
    }

    fn from_env(&self) -> Option<RedactedApiKey> {
        match env::var(&self.env_var) {
            Ok(value) => {
                let key = RedactedApiKey::from_trimmed(&value);
                if let Some(key) = &key {
                    debug!("Using API key from {} ({} chars)", self.env_var, key.len());
                }
                key
            }
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => {
                warn!("Env var {} contains invalid unicode", self.env_var);
                None
            }
        }
    }
}

impl CredentialSource for EnvFallbackCredentials {
    fn get(&self) -> Result<Option<RedactedApiKey>, CredentialError> {
        match self.store.get()? {
            Some(key) => Ok(Some(key)),
            None => Ok(self.from_env()),
        }
    }

    fn set(&self, value: RedactedApiKey) -> Result<(), CredentialError> {
        self.store.set(value)
    }
}
