pub mod config;
pub mod credential;
pub mod query;
pub mod transport;

pub use config::ConfigError;
pub use credential::CredentialError;
pub use query::QueryError;
pub use transport::TransportError;

use thiserror::Error;

/// Failures that surface from setup and storage, outside a single query.
///
/// Query failures never use this type: they are returned as
/// [`crate::QueryOutcome`] values.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
