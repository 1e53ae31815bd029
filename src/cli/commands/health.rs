use anyhow::Result;

use super::load_config;
use crate::cli::ServiceArgs;
use crate::service::HttpChatService;
use crate::ui::{Spinner, Style};

pub async fn run_health(service: &ServiceArgs) -> Result<()> {
    let config = load_config(service)?;
    let client = HttpChatService::new(config.endpoint.clone(), config.timeout)?;

    let spinner = Spinner::new("Checking chat service...");
    let result = client.health().await;
    spinner.stop();

    let health = result?;
    println!(
        "{} {} {}",
        Style::success("✓"),
        Style::value(&health.status),
        Style::secondary(client.endpoint())
    );
    if !health.message.is_empty() {
        println!("  {}", health.message);
    }

    Ok(())
}
