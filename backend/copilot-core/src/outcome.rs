//! The single result of a `submit_question` call.

use crate::error::QueryError;

use common::{HttpStatusCode, RedactedApiKey};

const MISSING_CREDENTIAL_MESSAGE: &str = "Please set your OpenAI API key first";
const REQUEST_FAILED_MESSAGE: &str = "Sorry, an error occurred while processing your request.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No usable key; nothing was sent.
    MissingCredential,
    /// No response was obtained.
    TransportError,
    /// The API answered with a non-2xx status.
    HttpError(HttpStatusCode),
    /// A 2xx body without a usable answer.
    MalformedResponse,
}

impl FailureKind {
    /// Stable label for logs.
    pub fn category(&self) -> &'static str {
        match self {
            FailureKind::MissingCredential => "missing_credential",
            FailureKind::TransportError => "transport",
            FailureKind::HttpError(status) if status.is_client_error() => "client_error",
            FailureKind::HttpError(status) if status.is_server_error() => "server_error",
            FailureKind::HttpError(_) => "http_error",
            FailureKind::MalformedResponse => "malformed_response",
        }
    }

    pub fn status_code(&self) -> Option<HttpStatusCode> {
        match self {
            FailureKind::HttpError(status) => Some(*status),
            _ => None,
        }
    }
}

/// Exactly one of success or failure, owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Success { answer_text: String },
    Failure { kind: FailureKind, detail: String },
}

impl QueryOutcome {
    pub fn success(answer_text: impl Into<String>) -> Self {
        QueryOutcome::Success {
            answer_text: answer_text.into(),
        }
    }

    pub fn failure(kind: FailureKind, detail: impl Into<String>) -> Self {
        QueryOutcome::Failure {
            kind,
            detail: detail.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, QueryOutcome::Success { .. })
    }

    pub fn answer(&self) -> Option<&str> {
        match self {
            QueryOutcome::Success { answer_text } => Some(answer_text),
            QueryOutcome::Failure { .. } => None,
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            QueryOutcome::Success { .. } => None,
            QueryOutcome::Failure { kind, .. } => Some(*kind),
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            QueryOutcome::Success { .. } => None,
            QueryOutcome::Failure { detail, .. } => Some(detail),
        }
    }

    /// Text to show the user.
    ///
    /// A missing key gets setup guidance; every other failure gets the
    /// same generic apology.
    pub fn user_message(&self) -> &str {
        match self {
            QueryOutcome::Success { answer_text } => answer_text,
            QueryOutcome::Failure {
                kind: FailureKind::MissingCredential,
                ..
            } => MISSING_CREDENTIAL_MESSAGE,
            QueryOutcome::Failure { .. } => REQUEST_FAILED_MESSAGE,
        }
    }

    /// Strip any copy of `key` from the failure detail.
    pub(crate) fn redacted(self, key: &RedactedApiKey) -> Self {
        match self {
            QueryOutcome::Failure { kind, detail } => QueryOutcome::Failure {
                kind,
                detail: key.scrub(&detail),
            },
            success => success,
        }
    }
}

impl From<QueryError> for QueryOutcome {
    fn from(error: QueryError) -> Self {
        let kind = match &error {
            QueryError::MissingCredential { .. } => FailureKind::MissingCredential,
            QueryError::Transport { .. } => FailureKind::TransportError,
            QueryError::Http { status_code, .. } => FailureKind::HttpError(*status_code),
            QueryError::MalformedResponse { .. } => FailureKind::MalformedResponse,
        };

        QueryOutcome::Failure {
            kind,
            detail: error.message().to_string(),
        }
    }
}
