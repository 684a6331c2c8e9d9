pub mod chat;
pub mod config;
pub mod context;
pub mod credentials;
pub mod error;
pub mod outcome;
pub mod query;
pub mod transport;

#[cfg(test)]
mod tests;

pub use config::QueryConfig;
pub use context::{ContextExtractor, PageContext, PageSnapshot, PageSource};
pub use credentials::{CredentialSource, FileCredentialStore, InMemoryCredentialStore};
pub use outcome::{FailureKind, QueryOutcome};
pub use query::QueryService;
pub use transport::{HttpTransport, OutboundRequest, ReqwestTransport, TransportResponse};

pub const OPENAI_API_BASE_URL: &str = "https://api.openai.com/v1";
pub const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";
pub const OPENAI_CHAT_COMPLETIONS_URL: &str =
    const_format::concatcp!(OPENAI_API_BASE_URL, CHAT_COMPLETIONS_PATH);

/// Settings key the credential is stored under.
pub const API_KEY_SETTING: &str = "openaiApiKey";
