//! Per-query configuration, loadable from `copilot.toml`.

use crate::OPENAI_CHAT_COMPLETIONS_URL;
use crate::context::DEFAULT_MAX_CONTEXT_CHARS;
use crate::error::ConfigError;

use common::ErrorLocation;

use std::path::Path;
use std::time::Duration;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use url::Url;

const CONFIG_FILE_NAME: &str = "copilot.toml";

pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_SYSTEM_PROMPT: &str = "Analyze webpage content and answer questions.";
pub const DEFAULT_TEMPERATURE: f32 = 0.0;

const MAX_TEMPERATURE: f32 = 2.0;

// ============================================
// CONFIG STRUCT
// ============================================

/// Settings for one `submit_question` call.
///
/// Prompt wording and model choice are configuration, not separate code paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    #[serde(default = "default_max_context_chars")]
    pub max_context_chars: usize,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    /// `None` omits the field from the request body. Written as `"omit"`.
    #[serde(default = "default_temperature", with = "temperature_setting")]
    pub temperature: Option<f32>,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Transport timeout. Unset means the request may wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            max_context_chars: default_max_context_chars(),
            model: default_model(),
            system_prompt: default_system_prompt(),
            temperature: default_temperature(),
            endpoint: default_endpoint(),
            request_timeout_secs: None,
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_max_context_chars() -> usize {
    DEFAULT_MAX_CONTEXT_CHARS
}
fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}
fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}
fn default_temperature() -> Option<f32> {
    Some(DEFAULT_TEMPERATURE)
}
fn default_endpoint() -> String {
    OPENAI_CHAT_COMPLETIONS_URL.to_string()
}

/// TOML has no null, so an omitted temperature is spelled `"omit"`.
mod temperature_setting {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    const OMIT: &str = "omit";

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Setting {
        Value(f32),
        Word(String),
    }

    pub(super) fn serialize<S: Serializer>(
        temperature: &Option<f32>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match temperature {
            Some(value) => serializer.serialize_f32(*value),
            None => serializer.serialize_str(OMIT),
        }
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f32>, D::Error> {
        match Setting::deserialize(deserializer)? {
            Setting::Value(value) => Ok(Some(value)),
            Setting::Word(word) if word == OMIT => Ok(None),
            Setting::Word(word) => Err(D::Error::custom(format!(
                "temperature must be a number or \"{OMIT}\", got \"{word}\""
            ))),
        }
    }
}

// ============================================
// IMPLEMENTATION
// ============================================

impl QueryConfig {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    pub fn with_max_context_chars(mut self, max_context_chars: usize) -> Self {
        self.max_context_chars = max_context_chars;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Load config from {config_dir}/copilot.toml.
    ///
    /// # Returns
    ///
    /// Returns `Ok(QueryConfig)` if loaded successfully or defaults if file missing.
    /// Returns `Err(ConfigError)` if file exists but is corrupted/invalid.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            warn!("Failed to read config file: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::caller(),
                path: config_path.clone(),
                source: e,
            }
        })?;

        let config: QueryConfig = toml::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config TOML: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::caller(),
                path: config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Save config to {config_dir}/copilot.toml using atomic write.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if validation, directory creation,
    /// serialization, the write or the rename fails.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::caller(),
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let temp_path = config_dir.join(format!("{}.tmp", CONFIG_FILE_NAME));

        let contents = self.to_toml()?;

        std::fs::write(&temp_path, contents).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::caller(),
            path: temp_path.clone(),
            source: e,
        })?;

        // Atomic rename (POSIX guarantees atomicity)
        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::caller(),
            path: config_path.clone(),
            source: e,
        })?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::caller(),
            reason: e.to_string(),
        })
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_context_chars == 0 {
            return Err(ConfigError::validation(
                "max_context_chars must be greater than 0",
            ));
        }

        if self.model.trim().is_empty() {
            return Err(ConfigError::validation("model cannot be empty"));
        }

        if self.system_prompt.trim().is_empty() {
            return Err(ConfigError::validation("system_prompt cannot be empty"));
        }

        if let Some(temperature) = self.temperature {
            if !(0.0..=MAX_TEMPERATURE).contains(&temperature) {
                return Err(ConfigError::validation(format!(
                    "Invalid temperature: {temperature} (must be 0.0-{MAX_TEMPERATURE})"
                )));
            }
        }

        let endpoint = Url::parse(&self.endpoint).map_err(|e| {
            ConfigError::validation(format!("Invalid endpoint URL '{}': {e}", self.endpoint))
        })?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::validation(format!(
                "Invalid endpoint scheme: {}",
                endpoint.scheme()
            )));
        }

        if self.request_timeout_secs == Some(0) {
            return Err(ConfigError::validation(
                "request_timeout_secs must be greater than 0 when set",
            ));
        }

        Ok(())
    }
}
