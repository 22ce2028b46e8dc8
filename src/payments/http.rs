//! `reqwest`-backed transport

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use crate::config::ClientConfig;
use crate::error::{MonerooError, MonerooResult};
use crate::payments::traits::{HttpTransport, TransportRequest, TransportResponse};

/// Transport over a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> MonerooResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| {
                MonerooError::configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }

    /// Wrap an existing client, e.g. one with custom TLS or proxy settings.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> MonerooResult<TransportResponse> {
        debug!("{} {}", request.method, request.url);

        let mut builder = self.client.request(request.method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            error!("Moneroo request failed: {}", e);
            MonerooError::from(e)
        })?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!("Moneroo responded with HTTP {}", status);
        Ok(TransportResponse { status, body })
    }
}
