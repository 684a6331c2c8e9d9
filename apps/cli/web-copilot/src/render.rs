//! Turning outcomes into terminal output.

use copilot_core::{FailureKind, QueryOutcome};
use copilot_core::context::{TextDirection, detect_direction};

/// U+200F RIGHT-TO-LEFT MARK, so terminals with bidi support start the line right-aligned.
pub const RTL_MARK: char = '\u{200F}';

/// Shown instead of the generic missing-key message.
pub const SET_KEY_HINT: &str =
    "No OpenAI API key found. Run `web-copilot set-key` or set OPENAI_API_KEY.";

/// What to print and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Stdout(String),
    Stderr(String),
}

/// Answer on stdout, direction-marked; failures on stderr with the user message.
pub fn render_outcome(outcome: &QueryOutcome) -> Rendered {
    match outcome {
        QueryOutcome::Success { answer_text } => Rendered::Stdout(mark_direction(answer_text)),
        QueryOutcome::Failure { kind, detail } => {
            let message = match kind {
                FailureKind::MissingCredential => SET_KEY_HINT,
                _ => outcome.user_message(),
            };
            Rendered::Stderr(format!("{message}\n({}: {detail})", kind.category()))
        }
    }
}

pub fn mark_direction(text: &str) -> String {
    match detect_direction(text) {
        TextDirection::Rtl => {
            let mut marked = String::with_capacity(text.len() + RTL_MARK.len_utf8());
            marked.push(RTL_MARK);
            marked.push_str(text);
            marked
        }
        TextDirection::Ltr => text.to_string(),
    }
}
