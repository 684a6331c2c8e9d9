use crate::chat::{ChatCompletionResponse, ChatRequest, Role};
use crate::error::QueryError;

#[test]
fn given_role_when_serialized_then_lowercase() {
    assert_eq!(serde_json::to_string(&Role::System).unwrap(), "\"system\"");
    assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
}

#[test]
fn given_new_request_when_built_then_system_precedes_user() {
    let request = ChatRequest::new("gpt-4", "frame", "prompt").with_temperature(Some(0.2));

    assert_eq!(request.messages[0].role, Role::System);
    assert_eq!(request.messages[1].role, Role::User);
    assert_eq!(request.user_prompt(), Some("prompt"));
    assert_eq!(request.temperature, Some(0.2));
}

#[test]
fn given_completion_body_when_parsed_then_first_choice_returned() {
    let body = r#"{"choices":[{"message":{"content":"Paris"}},{"message":{"content":"Lyon"}}]}"#;

    let answer = ChatCompletionResponse::answer_from_body(body).unwrap();

    assert_eq!(answer, "Paris");
}

#[test]
fn given_malformed_bodies_when_parsed_then_malformed_response_errors() {
    let cases = [
        r#"{}"#,
        r#"{"choices":[]}"#,
        r#"{"choices":[{}]}"#,
        r#"{"choices":[{"message":{}}]}"#,
        r#"{"choices":[{"message":{"content":null}}]}"#,
        r#"{"choices":[{"message":{"content":""}}]}"#,
        r#"not json"#,
    ];

    for body in cases {
        let result = ChatCompletionResponse::answer_from_body(body);
        assert!(
            matches!(result, Err(QueryError::MalformedResponse { .. })),
            "expected malformed for {body}"
        );
    }
}
