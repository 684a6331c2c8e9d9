use web_copilot::commands::ask::{AskRequest, ask};
use web_copilot::commands::key::set_key;
use web_copilot::error::CopilotError;

use copilot_core::{
    FailureKind, FileCredentialStore, PageSnapshot, QueryConfig, QueryOutcome, ReqwestTransport,
};

use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request(question: &str) -> AskRequest {
    AskRequest {
        page: PageSnapshot::new(
            "https://example.com/recipes/pancakes",
            "Fluffy Pancakes",
            "Mix flour, milk and eggs. Rest the batter for 30 minutes.",
        ),
        question: question.to_string(),
        model: None,
        max_context_chars: None,
    }
}

/// **VALUE**: Exercises the whole command path: key saved with `set-key`, read back by
/// `ask`, sent as a bearer token, answer returned.
#[tokio::test]
async fn given_saved_key_when_asking_then_answer_returned_from_api() {
    // GIVEN: A key stored through the set-key command and a mock API
    let dir = TempDir::new().unwrap();
    let store = FileCredentialStore::new(dir.path());
    set_key(&store, " sk-cli-key \n").unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("authorization", "Bearer sk-cli-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "Rest it for 30 minutes." } }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let config = QueryConfig::default().with_endpoint(format!("{}/v1/chat/completions", server.uri()));

    // WHEN: Asking
    let outcome = ask(
        request("How long should the batter rest?"),
        &config,
        store,
        ReqwestTransport::new(None).unwrap(),
    )
    .await
    .unwrap();

    // THEN: The answer is returned
    assert_eq!(outcome, QueryOutcome::success("Rest it for 30 minutes."));
}

#[tokio::test]
async fn given_overrides_when_asking_then_request_uses_them() {
    let dir = TempDir::new().unwrap();
    let store = FileCredentialStore::new(dir.path());
    set_key(&store, "sk-cli-key").unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "ok" } }]
        })))
        .mount(&server)
        .await;
    let config = QueryConfig::default().with_endpoint(format!("{}/v1/chat/completions", server.uri()));

    let mut ask_request = request("Ingredients?");
    ask_request.model = Some("gpt-4o-mini".to_string());
    ask_request.max_context_chars = Some(9);

    ask(ask_request, &config, store, ReqwestTransport::new(None).unwrap())
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(body["model"], "gpt-4o-mini");
    let prompt = body["messages"][1]["content"].as_str().unwrap();
    assert!(prompt.contains("Mix flour"));
    assert!(!prompt.contains("Mix flour,"), "body should be cut at 9 chars");
}

#[tokio::test]
async fn given_no_key_when_asking_then_missing_credential_outcome() {
    let dir = TempDir::new().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let config = QueryConfig::default().with_endpoint(format!("{}/v1/chat/completions", server.uri()));

    let outcome = ask(
        request("Anything?"),
        &config,
        FileCredentialStore::new(dir.path()),
        ReqwestTransport::new(None).unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(outcome.failure_kind(), Some(FailureKind::MissingCredential));
}

#[tokio::test]
async fn given_blank_question_when_asking_then_input_error() {
    let dir = TempDir::new().unwrap();

    let result = ask(
        request("   "),
        &QueryConfig::default(),
        FileCredentialStore::new(dir.path()),
        ReqwestTransport::new(None).unwrap(),
    )
    .await;

    assert!(matches!(result, Err(CopilotError::Input { .. })));
}

#[tokio::test]
async fn given_zero_context_override_when_asking_then_config_error() {
    let dir = TempDir::new().unwrap();
    let mut ask_request = request("Anything?");
    ask_request.max_context_chars = Some(0);

    let result = ask(
        ask_request,
        &QueryConfig::default(),
        FileCredentialStore::new(dir.path()),
        ReqwestTransport::new(None).unwrap(),
    )
    .await;

    assert!(matches!(result, Err(CopilotError::Core { .. })));
}
