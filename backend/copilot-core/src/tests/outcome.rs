use crate::error::{QueryError, TransportError};
use crate::{FailureKind, QueryOutcome};

use common::HttpStatusCode;

#[test]
fn given_query_errors_when_converted_then_kinds_map_one_to_one() {
    let cases = [
        (
            QueryError::missing_credential("none"),
            FailureKind::MissingCredential,
        ),
        (
            QueryError::from(TransportError::network("dns failure")),
            FailureKind::TransportError,
        ),
        (
            QueryError::http(HttpStatusCode(429), "quota"),
            FailureKind::HttpError(HttpStatusCode(429)),
        ),
        (
            QueryError::malformed("no choices"),
            FailureKind::MalformedResponse,
        ),
    ];

    for (error, expected) in cases {
        let outcome = QueryOutcome::from(error);
        assert_eq!(outcome.failure_kind(), Some(expected));
    }
}

/// **VALUE**: The outcome detail is the bare message, without the `[file:line:col]` suffix
/// the error's Display carries.
#[test]
fn given_query_error_when_converted_then_detail_excludes_location() {
    let outcome = QueryOutcome::from(QueryError::malformed("response contained no choices"));

    assert_eq!(outcome.detail(), Some("response contained no choices"));
}

#[test]
fn given_missing_credential_when_user_message_requested_then_prompts_for_key() {
    let missing = QueryOutcome::failure(FailureKind::MissingCredential, "none");
    let failed = QueryOutcome::failure(FailureKind::HttpError(HttpStatusCode(500)), "boom");

    assert!(missing.user_message().contains("API key"));
    assert!(failed.user_message().starts_with("Sorry"));
    assert_ne!(missing.user_message(), failed.user_message());
}

#[test]
fn given_success_when_inspected_then_answer_is_user_message() {
    let outcome = QueryOutcome::success("Paris");

    assert!(outcome.is_success());
    assert_eq!(outcome.answer(), Some("Paris"));
    assert_eq!(outcome.user_message(), "Paris");
    assert_eq!(outcome.failure_kind(), None);
}

#[test]
fn given_failure_kinds_when_categorized_then_labels_are_stable() {
    assert_eq!(FailureKind::MissingCredential.category(), "missing_credential");
    assert_eq!(FailureKind::TransportError.category(), "transport");
    assert_eq!(FailureKind::HttpError(HttpStatusCode(401)).category(), "client_error");
    assert_eq!(FailureKind::HttpError(HttpStatusCode(502)).category(), "server_error");
    assert_eq!(FailureKind::HttpError(HttpStatusCode(302)).category(), "http_error");
    assert_eq!(FailureKind::MalformedResponse.category(), "malformed_response");
    assert_eq!(
        FailureKind::HttpError(HttpStatusCode(401)).status_code(),
        Some(HttpStatusCode(401))
    );
}
