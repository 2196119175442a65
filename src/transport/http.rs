//! reqwest-backed fetcher.

use std::time::Duration;

use reqwest::Client;

use crate::config::HttpConfig;
use crate::error::TransportError;
use crate::transport::{FetchFuture, FetchResponse, Fetcher};

/// Fetcher that performs real HTTP requests.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an existing client (shared pools, custom TLS, ...).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, address: &str) -> FetchFuture {
        let request = self.client.get(address);
        let address = address.to_string();

        Box::pin(async move {
            let response = request.send().await?;
            let status = response.status().as_u16();
            tracing::trace!(address = %address, status, "response headers received");

            let body = response
                .text()
                .await
                .map_err(|e| TransportError::Body(e.to_string()))?;
            Ok(FetchResponse { status, body })
        })
    }
}
