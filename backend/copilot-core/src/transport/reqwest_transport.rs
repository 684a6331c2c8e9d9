use super::{HttpTransport, OutboundRequest, TransportResponse};
use crate::error::TransportError;

use common::{ErrorLocation, HttpStatusCode};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use url::Url;

#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport. `None` leaves requests without a timeout.
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| TransportError::ClientBuild {
            message: e.to_string(),
            location: ErrorLocation::caller(),
        })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post(&self, request: OutboundRequest) -> Result<TransportResponse, TransportError> {
        let url = Url::parse(&request.url).map_err(|e| TransportError::InvalidRequest {
            message: format!("invalid endpoint URL: {e}"),
            location: ErrorLocation::caller(),
        })?;

        let mut builder = self.client.post(url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.body(request.body.to_string()).send().await?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let body = response.text().await?;

        debug!(
            "POST {} -> HTTP {} ({} bytes)",
            request.url,
            status.as_u16(),
            body.len()
        );

        Ok(TransportResponse {
            status: HttpStatusCode(status.as_u16()),
            status_text,
            body,
        })
    }
}
