use copilot_core::{
    FailureKind, InMemoryCredentialStore, PageSnapshot, QueryConfig, QueryOutcome, QueryService,
    ReqwestTransport,
};

use common::HttpStatusCode;

use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// End-to-end: QueryService -> ReqwestTransport -> mock completion API
// ============================================================================

const COMPLETIONS_PATH: &str = "/v1/chat/completions";
const KEY: &str = "sk-integration-key";

fn config_for(server: &MockServer) -> QueryConfig {
    QueryConfig::default().with_endpoint(format!("{}{COMPLETIONS_PATH}", server.uri()))
}

fn service(
    key: Option<&str>,
) -> QueryService<PageSnapshot, InMemoryCredentialStore, ReqwestTransport> {
    let page = PageSnapshot::new(
        "https://example.org/travel/france",
        "Visiting France",
        "Paris is the capital and largest city of France.",
    );
    let credentials = match key {
        Some(key) => InMemoryCredentialStore::with_key(key),
        None => InMemoryCredentialStore::new(),
    };
    QueryService::new(page, credentials, ReqwestTransport::new(None).unwrap())
}

/// **VALUE**: Proves the full stack against a real HTTP server: headers, body shape and
/// answer extraction.
#[tokio::test]
async fn given_mock_api_when_question_submitted_then_answer_returned() {
    // GIVEN: A completion API that demands the bearer key
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .and(header("authorization", format!("Bearer {KEY}").as_str()))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "Paris" } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Submitting a question
    let outcome = service(Some(KEY))
        .submit_question("What is the capital of France?", &config_for(&server))
        .await;

    // THEN: The answer comes back
    assert_eq!(outcome, QueryOutcome::success("Paris"));

    // AND: The body had system then user, with the page fields in the user prompt
    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["model"], "gpt-4");
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["role"], "user");
    let prompt = body["messages"][1]["content"].as_str().unwrap();
    assert!(prompt.contains("https://example.org/travel/france"));
    assert!(prompt.contains("Visiting France"));
    assert!(prompt.contains("Paris is the capital"));
    assert!(prompt.contains("What is the capital of France?"));
}

#[tokio::test]
async fn given_api_rejects_key_when_question_submitted_then_http_error_401() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "message": "Incorrect API key provided.", "code": "invalid_api_key" }
        })))
        .mount(&server)
        .await;

    let outcome = service(Some(KEY))
        .submit_question("Capital?", &config_for(&server))
        .await;

    assert_eq!(
        outcome.failure_kind(),
        Some(FailureKind::HttpError(HttpStatusCode(401)))
    );
    assert!(outcome.detail().unwrap().contains("Incorrect API key provided."));
}

#[tokio::test]
async fn given_api_internal_error_when_question_submitted_then_http_error_500() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let outcome = service(Some(KEY))
        .submit_question("Capital?", &config_for(&server))
        .await;

    assert_eq!(
        outcome.failure_kind(),
        Some(FailureKind::HttpError(HttpStatusCode(500)))
    );
    assert_eq!(outcome.detail(), Some("HTTP 500 Internal Server Error"));
}

#[tokio::test]
async fn given_no_key_when_question_submitted_then_server_never_called() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let outcome = service(None)
        .submit_question("Capital?", &config_for(&server))
        .await;

    assert_eq!(outcome.failure_kind(), Some(FailureKind::MissingCredential));
}

#[tokio::test]
async fn given_closed_port_when_question_submitted_then_transport_error() {
    let config = QueryConfig::default().with_endpoint("http://127.0.0.1:9/v1/chat/completions");

    let outcome = service(Some(KEY)).submit_question("Capital?", &config).await;

    assert_eq!(outcome.failure_kind(), Some(FailureKind::TransportError));
}
