use super::CredentialSource;
use crate::API_KEY_SETTING;
use crate::error::CredentialError;

use common::{ErrorLocation, RedactedApiKey};

use std::path::{Path, PathBuf};

use log::{debug, info};
use serde_json::{Map, Value};

const SETTINGS_FILE_NAME: &str = "settings.json";

/// Flat JSON settings file holding the key under [`API_KEY_SETTING`].
///
/// Other entries in the file are preserved on write.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Store backed by `{settings_dir}/settings.json`.
    pub fn new(settings_dir: &Path) -> Self {
        Self {
            path: settings_dir.join(SETTINGS_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_settings(&self) -> Result<Map<String, Value>, CredentialError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|e| CredentialError::Read {
            path: self.path.clone(),
            source: e,
            location: ErrorLocation::caller(),
        })?;

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        let value: Value = serde_json::from_str(&contents).map_err(|e| CredentialError::Format {
            path: self.path.clone(),
            reason: e.to_string(),
            location: ErrorLocation::caller(),
        })?;

        match value {
            Value::Object(map) => Ok(map),
            _ => Err(CredentialError::Format {
                path: self.path.clone(),
                reason: "settings file is not a JSON object".to_string(),
                location: ErrorLocation::caller(),
            }),
        }
    }

    fn write_settings(&self, settings: &Map<String, Value>) -> Result<(), CredentialError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| CredentialError::Write {
                path: dir.to_path_buf(),
                source: e,
                location: ErrorLocation::caller(),
            })?;
        }

        let json = serde_json::to_string_pretty(settings).map_err(|e| CredentialError::Format {
            path: self.path.clone(),
            reason: e.to_string(),
            location: ErrorLocation::caller(),
        })?;

        let temp_path = self.path.with_extension("json.tmp");

        std::fs::write(&temp_path, json).map_err(|e| CredentialError::Write {
            path: temp_path.clone(),
            source: e,
            location: ErrorLocation::caller(),
        })?;

        std::fs::rename(&temp_path, &self.path).map_err(|e| CredentialError::Write {
            path: self.path.clone(),
            source: e,
            location: ErrorLocation::caller(),
        })?;

        Ok(())
    }
}

impl CredentialSource for FileCredentialStore {
    fn get(&self) -> Result<Option<RedactedApiKey>, CredentialError> {
        let settings = self.read_settings()?;

        let key = settings
            .get(API_KEY_SETTING)
            .and_then(Value::as_str)
            .and_then(RedactedApiKey::from_trimmed);

        match &key {
            Some(key) => debug!("Loaded API key from {} ({} chars)", self.path.display(), key.len()),
            None => debug!("No API key stored in {}", self.path.display()),
        }

        Ok(key)
    }

    fn set(&self, value: RedactedApiKey) -> Result<(), CredentialError> {
        let key = RedactedApiKey::from_trimmed(value.as_str()).ok_or_else(|| CredentialError::empty())?;

        let mut settings = self.read_settings()?;
        settings.insert(
            API_KEY_SETTING.to_string(),
            Value::String(key.as_str().to_string()),
        );
        self.write_settings(&settings)?;

        info!("API key saved to {} ({} chars)", self.path.display(), key.len());
        Ok(())
    }
}
