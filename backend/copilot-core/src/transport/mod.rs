//! Outbound HTTP for completion requests.
//!
//! [`HttpTransport`] is the seam tests replace; [`ReqwestTransport`] is
//! the production implementation.

mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;

use crate::error::TransportError;

use common::HttpStatusCode;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const AUTHORIZATION_HEADER: &str = "Authorization";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// One JSON POST, fully described.
#[derive(Clone)]
pub struct OutboundRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Value,
}

impl OutboundRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Debug for OutboundRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(key, value)| {
                if key.eq_ignore_ascii_case(AUTHORIZATION_HEADER) {
                    (key.as_str(), "[REDACTED]")
                } else {
                    (key.as_str(), value.as_str())
                }
            })
            .collect();

        f.debug_struct("OutboundRequest")
            .field("url", &self.url)
            .field("headers", &headers)
            .field("body_bytes", &self.body.to_string().len())
            .finish()
    }
}

/// Whatever came back, successful status or not.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: HttpStatusCode,
    pub status_text: String,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: impl Into<HttpStatusCode>, body: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            status_text: String::new(),
            body: body.into(),
        }
    }

    pub fn with_status_text(mut self, status_text: impl Into<String>) -> Self {
        self.status_text = status_text.into();
        self
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send `request` once. Only failures to obtain a response are errors.
    async fn post(&self, request: OutboundRequest) -> Result<TransportResponse, TransportError>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    async fn post(&self, request: OutboundRequest) -> Result<TransportResponse, TransportError> {
        (**self).post(request).await
    }
}
