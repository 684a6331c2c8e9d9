//! Shared building blocks for Web Copilot.
//!
//! This crate holds the small value types every other crate leans on:
//! error locations, HTTP status codes and the redacted API key used as
//! the completion credential. It has no business logic.
//!
//! ## Architecture
//!
//! - **common** (this crate): Shared value types
//! - **copilot-core**: Page context capture and the completion query service
//! - **web-copilot**: Command-line host wiring everything together

pub mod error;
pub mod http_status;
pub mod redacted_key;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_key::RedactedApiKey;
