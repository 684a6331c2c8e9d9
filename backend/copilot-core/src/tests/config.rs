use crate::config::{DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT};
use crate::error::ConfigError;
use crate::{OPENAI_CHAT_COMPLETIONS_URL, QueryConfig};

use tempfile::TempDir;

#[test]
fn given_default_config_when_inspected_then_matches_documented_defaults() {
    let config = QueryConfig::default();

    assert_eq!(config.max_context_chars, 10_000);
    assert_eq!(config.model, DEFAULT_MODEL);
    assert_eq!(config.system_prompt, DEFAULT_SYSTEM_PROMPT);
    assert_eq!(config.temperature, Some(0.0));
    assert_eq!(config.endpoint, "https://api.openai.com/v1/chat/completions");
    assert_eq!(config.endpoint, OPENAI_CHAT_COMPLETIONS_URL);
    assert_eq!(config.request_timeout(), None);
    assert!(config.validate().is_ok());
}

#[test]
fn given_missing_file_when_loaded_then_defaults_returned() {
    let dir = TempDir::new().unwrap();

    let config = QueryConfig::load(dir.path()).unwrap();

    assert_eq!(config, QueryConfig::default());
}

/// **VALUE**: Verifies a saved config loads back unchanged.
///
/// **BUG THIS CATCHES**: Would catch serde attribute drift between the
/// serialized and deserialized field names.
#[test]
fn given_custom_config_when_saved_and_loaded_then_values_survive() {
    // GIVEN: A customized config
    let dir = TempDir::new().unwrap();
    let config = QueryConfig {
        request_timeout_secs: Some(45),
        temperature: Some(0.7),
        ..QueryConfig::default()
            .with_model("gpt-4o")
            .with_system_prompt("Answer briefly.")
            .with_max_context_chars(4_000)
    };

    // WHEN: Saving then loading
    config.save(dir.path()).unwrap();
    let loaded = QueryConfig::load(dir.path()).unwrap();

    // THEN: Identical, and no temp file left behind
    assert_eq!(loaded, config);
    assert!(!dir.path().join("copilot.toml.tmp").exists());
}

/// **VALUE**: A config that leaves temperature out of the request must stay that way
/// after a save/load cycle.
///
/// **BUG THIS CATCHES**: Skipping `None` on save while defaulting on load silently
/// turned an omitted temperature back into `Some(0.0)`.
#[test]
fn given_omitted_temperature_when_saved_and_loaded_then_stays_omitted() {
    // GIVEN: A config that sends no temperature
    let dir = TempDir::new().unwrap();
    let config = QueryConfig {
        temperature: None,
        ..QueryConfig::default()
    };

    // WHEN: Saving then loading
    config.save(dir.path()).unwrap();
    let written = std::fs::read_to_string(dir.path().join("copilot.toml")).unwrap();
    let loaded = QueryConfig::load(dir.path()).unwrap();

    // THEN: The file says so explicitly and the loaded config still omits it
    assert!(written.contains("temperature = \"omit\""), "got:\n{written}");
    assert_eq!(loaded.temperature, None);
    assert_eq!(loaded, config);
}

#[test]
fn given_file_without_temperature_when_loaded_then_default_temperature_used() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("copilot.toml"), "model = \"gpt-4o\"\n").unwrap();

    let config = QueryConfig::load(dir.path()).unwrap();

    assert_eq!(config.temperature, Some(0.0));
}

#[test]
fn given_unknown_temperature_word_when_loaded_then_parse_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("copilot.toml"), "temperature = \"warm\"\n").unwrap();

    let result = QueryConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn given_partial_file_when_loaded_then_missing_fields_take_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("copilot.toml"), "model = \"gpt-4o\"\n").unwrap();

    let config = QueryConfig::load(dir.path()).unwrap();

    assert_eq!(config.model, "gpt-4o");
    assert_eq!(config.max_context_chars, 10_000);
    assert_eq!(config.system_prompt, DEFAULT_SYSTEM_PROMPT);
}

#[test]
fn given_corrupt_file_when_loaded_then_parse_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("copilot.toml"), "model = [unclosed").unwrap();

    let result = QueryConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn given_invalid_values_when_validated_then_rejected() {
    let invalid = [
        QueryConfig::default().with_max_context_chars(0),
        QueryConfig::default().with_model("  "),
        QueryConfig::default().with_system_prompt(""),
        QueryConfig::default().with_endpoint("not a url"),
        QueryConfig::default().with_endpoint("ftp://api.example.com/chat"),
        QueryConfig {
            temperature: Some(3.5),
            ..QueryConfig::default()
        },
        QueryConfig {
            temperature: Some(f32::NAN),
            ..QueryConfig::default()
        },
        QueryConfig {
            request_timeout_secs: Some(0),
            ..QueryConfig::default()
        },
    ];

    for config in invalid {
        assert!(
            matches!(config.validate(), Err(ConfigError::ValidationError { .. })),
            "should reject {config:?}"
        );
    }
}

#[test]
fn given_invalid_file_contents_when_loaded_then_validation_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("copilot.toml"), "max_context_chars = 0\n").unwrap();

    let result = QueryConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
fn given_invalid_config_when_saved_then_nothing_written() {
    let dir = TempDir::new().unwrap();

    let result = QueryConfig::default().with_max_context_chars(0).save(dir.path());

    assert!(result.is_err());
    assert!(!dir.path().join("copilot.toml").exists());
}
