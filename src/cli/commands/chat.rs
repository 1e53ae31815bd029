use anyhow::Result;

use super::load_config;
use crate::chat::{ChatSession, SessionConfig};
use crate::cli::ServiceArgs;
use crate::service::HttpChatService;

pub async fn run_chat(service: &ServiceArgs) -> Result<()> {
    let config = load_config(service)?;
    let client = HttpChatService::new(config.endpoint.clone(), config.timeout)?;

    let mut session = ChatSession::new(SessionConfig::from(config), Box::new(client));
    session.run().await
}
