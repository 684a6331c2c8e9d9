//! `web-copilot set-key`

use crate::error::CopilotError;

use copilot_core::CredentialSource;

use common::RedactedApiKey;

use std::io::BufRead;

pub const SAVED_MESSAGE: &str = "API key saved successfully!";

/// Store `raw` after trimming; blank input is refused.
pub fn set_key<C: CredentialSource>(credentials: &C, raw: &str) -> Result<(), CopilotError> {
    let key = RedactedApiKey::from_trimmed(raw)
        .ok_or_else(|| CopilotError::input("Please enter an API key"))?;
    credentials.set(key)?;
    Ok(())
}

/// First line of stdin, for keys kept out of shell history.
pub fn read_key_from_stdin() -> Result<String, CopilotError> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| CopilotError::input(format!("Failed to read API key from stdin: {e}")))?;
    Ok(line)
}
