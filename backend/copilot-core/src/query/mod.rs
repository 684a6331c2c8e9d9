//! One question, one completion request, one [`QueryOutcome`].
//!
//! # Lifecycle
//! Each call walks `Idle -> CredentialChecked -> ContextCaptured ->
//! RequestBuilt -> AwaitingResponse -> Succeeded | Failed` on its own
//! stack. The service holds no per-call state, so overlapping calls never
//! observe each other; limiting callers to one request in flight is the
//! caller's job.
//!
//! # Security
//! The key is read once per call, placed in the `Authorization` header,
//! and scrubbed from every failure detail.

mod response;

use crate::chat::{ChatRequest, compose_prompt};
use crate::config::QueryConfig;
use crate::context::{ContextExtractor, PageSource};
use crate::credentials::CredentialSource;
use crate::error::{QueryError, TransportError};
use crate::outcome::QueryOutcome;
use crate::transport::{
    AUTHORIZATION_HEADER, CONTENT_TYPE_HEADER, HttpTransport, JSON_CONTENT_TYPE, OutboundRequest,
};

use common::RedactedApiKey;

use log::{debug, info, warn};

/// Progress of a single call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryPhase {
    Idle,
    CredentialChecked,
    ContextCaptured,
    RequestBuilt,
    AwaitingResponse,
    Succeeded,
    Failed,
}

/// Per-call phase tracker. Lives on the stack of one `submit_question`.
struct PhaseTracker {
    phase: QueryPhase,
}

impl PhaseTracker {
    fn new() -> Self {
        Self {
            phase: QueryPhase::Idle,
        }
    }

    fn advance(&mut self, next: QueryPhase) {
        debug!("Query phase {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }
}

pub struct QueryService<P, C, T> {
    extractor: ContextExtractor<P>,
    credentials: C,
    transport: T,
}

impl<P, C, T> QueryService<P, C, T>
where
    P: PageSource,
    C: CredentialSource,
    T: HttpTransport,
{
    pub fn new(page: P, credentials: C, transport: T) -> Self {
        Self {
            extractor: ContextExtractor::new(page),
            credentials,
            transport,
        }
    }

    /// Ask `question` about the current page.
    ///
    /// Never panics past this boundary and never returns an error: every
    /// failure is a [`QueryOutcome::Failure`] whose kind the caller can
    /// branch on. Without a key, no context is captured and nothing is sent.
    pub async fn submit_question(&self, question: &str, config: &QueryConfig) -> QueryOutcome {
        let mut tracker = PhaseTracker::new();

        let key = match self.resolve_credential() {
            Ok(key) => key,
            Err(error) => {
                tracker.advance(QueryPhase::Failed);
                warn!("Query not sent: {error}");
                return QueryOutcome::from(error);
            }
        };
        tracker.advance(QueryPhase::CredentialChecked);

        match self.exchange(&key, question, config, &mut tracker).await {
            Ok(answer_text) => {
                tracker.advance(QueryPhase::Succeeded);
                info!("Query answered ({} chars)", answer_text.chars().count());
                QueryOutcome::success(answer_text)
            }
            Err(error) => {
                tracker.advance(QueryPhase::Failed);
                let outcome = QueryOutcome::from(error).redacted(&key);
                if let QueryOutcome::Failure { kind, detail } = &outcome {
                    warn!("Query failed [{}]: {}", kind.category(), detail);
                }
                outcome
            }
        }
    }

    /// Key from the credential source; blank, absent or unreadable is missing.
    #[track_caller]
    fn resolve_credential(&self) -> Result<RedactedApiKey, QueryError> {
        match self.credentials.get() {
            Ok(Some(key)) if !key.is_blank() => Ok(key),
            Ok(_) => Err(QueryError::missing_credential("no API key configured")),
            Err(error) => {
                warn!("Credential source unavailable: {error}");
                Err(QueryError::missing_credential(
                    "API key could not be read from the settings store",
                ))
            }
        }
    }

    async fn exchange(
        &self,
        key: &RedactedApiKey,
        question: &str,
        config: &QueryConfig,
        tracker: &mut PhaseTracker,
    ) -> Result<String, QueryError> {
        let context = self.extractor.capture(config.max_context_chars);
        tracker.advance(QueryPhase::ContextCaptured);

        let request = build_chat_request(&compose_prompt(&context, question), config);
        let outbound = build_outbound_request(&request, key, config)?;
        tracker.advance(QueryPhase::RequestBuilt);

        debug!("Sending completion request: {outbound:?}");
        tracker.advance(QueryPhase::AwaitingResponse);
        let response = self.transport.post(outbound).await?;

        response::interpret(response)
    }
}

/// System framing first, composed prompt last.
pub fn build_chat_request(prompt: &str, config: &QueryConfig) -> ChatRequest {
    ChatRequest::new(config.model.as_str(), config.system_prompt.as_str(), prompt)
        .with_temperature(config.temperature)
}

#[track_caller]
fn build_outbound_request(
    request: &ChatRequest,
    key: &RedactedApiKey,
    config: &QueryConfig,
) -> Result<OutboundRequest, QueryError> {
    let body = serde_json::to_value(request)
        .map_err(|e| TransportError::invalid_request(format!("request body: {e}")))?;

    Ok(OutboundRequest {
        url: config.endpoint.clone(),
        headers: vec![
            (CONTENT_TYPE_HEADER.to_string(), JSON_CONTENT_TYPE.to_string()),
            (
                AUTHORIZATION_HEADER.to_string(),
                format!("Bearer {}", key.as_str()),
            ),
        ],
        body,
    })
}
