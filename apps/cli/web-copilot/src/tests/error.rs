use crate::error::CopilotError;

use copilot_core::error::ConfigError;

/// **VALUE**: Tests that errors serialize with a type tag, for hosts that report
/// failures as JSON.
#[test]
fn given_copilot_error_when_serialized_then_tagged_with_variant() {
    // GIVEN: An input error
    let err = CopilotError::input("Question cannot be empty");

    // WHEN: Serializing to JSON
    let json = serde_json::to_string(&err).expect("error should serialize");

    // THEN: Variant and message are present
    assert!(json.contains("\"type\":\"Input\""));
    assert!(json.contains("Question cannot be empty"));
}

#[test]
fn given_config_error_when_converted_then_core_variant_keeps_message() {
    let err = CopilotError::from(ConfigError::validation("model cannot be empty"));

    match err {
        CopilotError::Core { message, .. } => assert!(message.contains("model cannot be empty")),
        other => panic!("expected Core, got {other:?}"),
    }
}
