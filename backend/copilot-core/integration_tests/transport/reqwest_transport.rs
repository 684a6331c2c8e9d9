use copilot_core::transport::{OutboundRequest, ReqwestTransport};
use copilot_core::HttpTransport;

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request_to(server: &MockServer, body: serde_json::Value) -> OutboundRequest {
    OutboundRequest {
        url: format!("{}/v1/chat/completions", server.uri()),
        headers: vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Authorization".to_string(), "Bearer sk-wire".to_string()),
        ],
        body,
    }
}

/// **VALUE**: Verifies headers and JSON body reach the server exactly as built.
#[tokio::test]
async fn given_outbound_request_when_posted_then_server_receives_headers_and_body() {
    // GIVEN: A server that only matches the exact request
    let server = MockServer::start().await;
    let body = json!({"model": "gpt-4", "messages": []});
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-wire"))
        .and(header("content-type", "application/json"))
        .and(body_json(&body))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"ok\":true}"))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Posting through reqwest
    let transport = ReqwestTransport::new(None).unwrap();
    let response = transport.post(request_to(&server, body)).await.unwrap();

    // THEN: 200 with the body passed through
    assert!(response.status.is_success());
    assert_eq!(response.status_text, "OK");
    assert_eq!(response.body, "{\"ok\":true}");
}

/// **VALUE**: A failing status is a response, not a transport error.
///
/// **BUG THIS CATCHES**: Would catch `error_for_status()` sneaking into the transport and
/// turning every 401 into a `TransportError`.
#[tokio::test]
async fn given_server_error_status_when_posted_then_response_returned_not_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new(None).unwrap();
    let response = transport
        .post(request_to(&server, json!({})))
        .await
        .expect("non-2xx must not be an Err");

    assert_eq!(response.status.as_u16(), 500);
    assert_eq!(response.status_text, "Internal Server Error");
    assert_eq!(response.body, "upstream exploded");
}

#[tokio::test]
async fn given_unreachable_host_when_posted_then_network_error() {
    // Port 9 (discard) on localhost is closed on test machines
    let transport = ReqwestTransport::new(Some(Duration::from_secs(5))).unwrap();
    let request = OutboundRequest {
        url: "http://127.0.0.1:9/v1/chat/completions".to_string(),
        headers: Vec::new(),
        body: json!({}),
    };

    let result = transport.post(request).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn given_slow_server_when_timeout_set_then_timeout_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new(Some(Duration::from_millis(200))).unwrap();
    let result = transport.post(request_to(&server, json!({}))).await;

    let error = result.expect_err("should time out");
    assert!(error.is_timeout(), "expected timeout, got {error}");
}

#[tokio::test]
async fn given_invalid_url_when_posted_then_invalid_request_error() {
    let transport = ReqwestTransport::new(None).unwrap();
    let request = OutboundRequest {
        url: "not a url".to_string(),
        headers: Vec::new(),
        body: json!({}),
    };

    let error = transport.post(request).await.unwrap_err();

    assert!(error.to_string().contains("Invalid Request Error"));
}
