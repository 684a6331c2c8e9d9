//! `web-copilot ask`

use crate::error::CopilotError;

use copilot_core::{
    CredentialSource, HttpTransport, PageSnapshot, QueryConfig, QueryOutcome, QueryService,
};

use std::io::Read;
use std::path::Path;

use log::{debug, info};

/// Everything the user supplied about one question.
#[derive(Debug, Clone)]
pub struct AskRequest {
    pub page: PageSnapshot,
    pub question: String,
    pub model: Option<String>,
    pub max_context_chars: Option<usize>,
}

impl AskRequest {
    /// Apply per-invocation overrides on top of the loaded config.
    pub fn effective_config(&self, base: &QueryConfig) -> Result<QueryConfig, CopilotError> {
        let mut config = base.clone();
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(max_context_chars) = self.max_context_chars {
            config.max_context_chars = max_context_chars;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Page text from a file, or stdin for `-`.
pub fn read_page_text(source: &str) -> Result<String, CopilotError> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| CopilotError::input(format!("Failed to read page text from stdin: {e}")))?;
        return Ok(text);
    }

    std::fs::read_to_string(Path::new(source))
        .map_err(|e| CopilotError::input(format!("Failed to read page text from {source}: {e}")))
}

/// Submit one question and hand back the outcome unchanged.
pub async fn ask<C, T>(
    request: AskRequest,
    base_config: &QueryConfig,
    credentials: C,
    transport: T,
) -> Result<QueryOutcome, CopilotError>
where
    C: CredentialSource,
    T: HttpTransport,
{
    let config = request.effective_config(base_config)?;
    if request.question.trim().is_empty() {
        return Err(CopilotError::input("Question cannot be empty"));
    }

    debug!(
        "Asking about {} with model {} ({} page chars)",
        request.page.url,
        config.model,
        request.page.text.chars().count()
    );

    let service = QueryService::new(request.page, credentials, transport);
    let outcome = service.submit_question(&request.question, &config).await;

    if outcome.is_success() {
        info!("Answer received");
    }
    Ok(outcome)
}
