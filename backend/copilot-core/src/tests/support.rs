// Test doubles shared by the unit tests.

use crate::error::{CredentialError, TransportError};
use crate::{CredentialSource, HttpTransport, OutboundRequest, TransportResponse};

use common::RedactedApiKey;

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

pub(crate) enum FakeReply {
    Respond {
        status: u16,
        status_text: &'static str,
        body: String,
    },
    ConnectionRefused,
}

/// Transport that replays one canned reply and records every request.
pub(crate) struct FakeTransport {
    reply: FakeReply,
    calls: AtomicUsize,
    requests: Mutex<Vec<OutboundRequest>>,
}

impl FakeTransport {
    pub(crate) fn responding(status: u16, body: impl Into<String>) -> Self {
        Self::new(FakeReply::Respond {
            status,
            status_text: "",
            body: body.into(),
        })
    }

    pub(crate) fn responding_with_reason(
        status: u16,
        status_text: &'static str,
        body: impl Into<String>,
    ) -> Self {
        Self::new(FakeReply::Respond {
            status,
            status_text,
            body: body.into(),
        })
    }

    pub(crate) fn refusing() -> Self {
        Self::new(FakeReply::ConnectionRefused)
    }

    fn new(reply: FakeReply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_request(&self) -> Option<OutboundRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn post(&self, request: OutboundRequest) -> Result<TransportResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);

        match &self.reply {
            FakeReply::Respond {
                status,
                status_text,
                body,
            } => Ok(TransportResponse::new(*status, body.clone()).with_status_text(*status_text)),
            FakeReply::ConnectionRefused => Err(TransportError::connection_refused(
                "error sending request: connection refused",
            )),
        }
    }
}

/// Credential source whose reads always fail.
pub(crate) struct BrokenCredentials;

impl CredentialSource for BrokenCredentials {
    fn get(&self) -> Result<Option<RedactedApiKey>, CredentialError> {
        Err(CredentialError::store("settings store offline"))
    }

    fn set(&self, _value: RedactedApiKey) -> Result<(), CredentialError> {
        Err(CredentialError::store("settings store offline"))
    }
}

pub(crate) fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
    .to_string()
}
