use crate::chat::ChatCompletionResponse;
use crate::context::truncate_chars;
use crate::error::QueryError;
use crate::transport::TransportResponse;

use serde::Deserialize;

const BODY_EXCERPT_CHARS: usize = 200;

/// Error envelope returned by OpenAI-compatible APIs.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Turn a raw response into answer text.
///
/// Non-2xx bodies are never parsed as completions.
pub(super) fn interpret(response: TransportResponse) -> Result<String, QueryError> {
    if !response.status.is_success() {
        return Err(QueryError::http(response.status, http_failure_detail(&response)));
    }

    ChatCompletionResponse::answer_from_body(&response.body)
}

/// `HTTP <code> <reason>: <excerpt>`, preferring the API's own error message.
fn http_failure_detail(response: &TransportResponse) -> String {
    let mut detail = format!("HTTP {}", response.status);
    if !response.status_text.is_empty() {
        detail.push(' ');
        detail.push_str(&response.status_text);
    }

    let excerpt = match response.json::<ApiErrorBody>() {
        Ok(body) => body.error.message,
        Err(_) => response.body.trim().to_string(),
    };

    if !excerpt.is_empty() {
        detail.push_str(": ");
        detail.push_str(&truncate_chars(&excerpt, BODY_EXCERPT_CHARS));
    }

    detail
}
