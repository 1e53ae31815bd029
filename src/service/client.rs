use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::{ChatService, RequestFailure};
use crate::session::OutboundRequest;

#[derive(Debug, Deserialize)]
struct ChatReply {
    response: String,
}

/// Body of the service's `GET /health` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

/// [`ChatService`] over HTTP: `POST {endpoint}/chat` with a JSON body.
pub struct HttpChatService {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpChatService {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.endpoint.trim_end_matches('/'))
    }

    /// Probes the service's health endpoint.
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.url("health");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to connect to chat service: {url}"))?;

        if !response.status().is_success() {
            anyhow::bail!("Health check failed with status {}", response.status());
        }

        response
            .json::<HealthStatus>()
            .await
            .context("Failed to parse health check response")
    }
}

#[async_trait]
impl ChatService for HttpChatService {
    async fn send(&self, request: &OutboundRequest) -> Result<String, RequestFailure> {
        let url = self.url("chat");
        tracing::debug!(%url, session_id = %request.session_id, "sending chat request");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| RequestFailure::from_reqwest(e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                tracing::debug!(error = %e, %status, "failed to read error response body");
                String::new()
            });
            return Err(RequestFailure::Status { status, body });
        }

        let body = response
            .text()
            .await
            .map_err(|e| RequestFailure::from_reqwest(e, self.timeout))?;

        let reply: ChatReply =
            serde_json::from_str(&body).map_err(|e| RequestFailure::Malformed(e.to_string()))?;

        Ok(reply.response)
    }
}
