//! Outbound contract with the remote chat service.

mod client;
mod error;

use async_trait::async_trait;

use crate::session::OutboundRequest;

pub use client::{HealthStatus, HttpChatService};
pub use error::RequestFailure;

/// Anything that can answer one chat turn.
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Sends one accepted submission and returns the assistant reply text.
    async fn send(&self, request: &OutboundRequest) -> Result<String, RequestFailure>;
}
