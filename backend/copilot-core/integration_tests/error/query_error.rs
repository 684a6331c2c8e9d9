use copilot_core::error::{QueryError, TransportError};

use common::HttpStatusCode;

/// **VALUE**: Verifies query errors carry the location where they were raised.
///
/// **WHY THIS MATTERS**: The outcome only shows the message; logs rely on the
/// `[file:line:col]` suffix to tell which step failed.
#[test]
fn given_http_error_when_formatted_then_includes_status_and_location() {
    // GIVEN: An HTTP failure raised here
    let error = QueryError::http(HttpStatusCode(401), "Unauthorized");

    // WHEN: Formatting
    let text = error.to_string();

    // THEN: Kind, status, message and this file's location are present
    assert!(text.contains("HTTP Error"));
    assert!(text.contains("401"));
    assert!(text.contains("Unauthorized"));
    assert!(text.contains("query_error.rs"));
    assert!(error.location().file.contains("query_error.rs"));
}

#[test]
fn given_transport_error_when_converted_then_timeout_flag_kept() {
    let error = QueryError::from(TransportError::network("operation timed out"));

    match error {
        QueryError::Transport {
            message,
            is_timeout,
            ..
        } => {
            assert_eq!(message, "operation timed out");
            assert!(!is_timeout);
        }
        other => panic!("expected transport variant, got {other:?}"),
    }
}
