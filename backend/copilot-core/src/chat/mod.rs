//! Wire types for the chat-completion API.

pub mod prompt;

pub use prompt::compose_prompt;

use crate::error::QueryError;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Body of a single, non-streaming completion request.
///
/// Messages are always system framing first and the composed user prompt last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl ChatRequest {
    pub fn new(
        model: impl Into<String>,
        system_prompt: impl Into<String>,
        user_prompt: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            messages: vec![
                ChatMessage::system(system_prompt),
                ChatMessage::user(user_prompt),
            ],
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    /// The prompt carried by the trailing user message.
    pub fn user_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Parse a raw body and pull out the first completion's text.
    #[track_caller]
    pub fn answer_from_body(body: &str) -> Result<String, QueryError> {
        let response: ChatCompletionResponse = serde_json::from_str(body)?;
        response.into_answer()
    }

    /// Content of the first choice. Missing or blank content is malformed.
    #[track_caller]
    pub fn into_answer(self) -> Result<String, QueryError> {
        let first = self
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| QueryError::malformed("response contained no choices"))?;

        let content = first
            .message
            .and_then(|message| message.content)
            .ok_or_else(|| QueryError::malformed("first choice has no message content"))?;

        if content.trim().is_empty() {
            return Err(QueryError::malformed("first choice message content is empty"));
        }

        Ok(content)
    }
}
