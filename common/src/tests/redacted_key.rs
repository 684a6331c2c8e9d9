use crate::RedactedApiKey;
use crate::redacted_key::REDACTION_MARKER;

/// **VALUE**: Ensures the key never shows up through `{:?}` or `{}`.
///
/// **WHY THIS MATTERS**: Outcomes, requests and errors are logged with Debug formatting.
/// A derived Debug would print the secret straight into the log file.
#[test]
fn given_api_key_when_formatted_then_value_is_hidden() {
    // GIVEN: A key with a recognizable value
    let key = RedactedApiKey::new("sk-live-secret-value".to_string());

    // WHEN: Formatting it both ways
    let debug = format!("{key:?}");
    let display = format!("{key}");

    // THEN: Neither contains the secret
    assert!(!debug.contains("secret"));
    assert!(!display.contains("secret"));
    assert_eq!(key.len(), "sk-live-secret-value".len());
}

#[test]
fn given_api_key_when_serialized_then_fails() {
    let key = RedactedApiKey::new("sk-live-secret-value".to_string());

    let result = serde_json::to_string(&key);

    assert!(result.is_err(), "Serialization must be refused");
}

#[test]
fn given_padded_input_when_from_trimmed_then_strips_whitespace() {
    let key = RedactedApiKey::from_trimmed("  sk-abc \n").expect("non-blank key");

    assert_eq!(key.as_str(), "sk-abc");
}

#[test]
fn given_blank_input_when_from_trimmed_then_returns_none() {
    assert!(RedactedApiKey::from_trimmed("").is_none());
    assert!(RedactedApiKey::from_trimmed("   \t").is_none());
    assert!(RedactedApiKey::new(" ".to_string()).is_blank());
}

/// **VALUE**: Verifies `scrub()` removes every copy of the key from free text.
///
/// **BUG THIS CATCHES**: Would catch a server echoing the key back in an error body
/// and that body being surfaced verbatim to the user.
#[test]
fn given_text_containing_key_when_scrubbed_then_all_occurrences_replaced() {
    let key = RedactedApiKey::new("sk-abc123".to_string());
    let text = "Incorrect API key provided: sk-abc123 (sk-abc123)";

    let scrubbed = key.scrub(text);

    assert!(!scrubbed.contains("sk-abc123"));
    assert_eq!(scrubbed.matches(REDACTION_MARKER).count(), 2);
}
