//! Subcommand implementations.

/// One-shot message command handler.
pub mod ask;

/// Interactive chat command handler.
pub mod chat;

/// Configure command handler.
pub mod configure;

/// Service health check handler.
pub mod health;

use anyhow::Result;

use crate::cli::ServiceArgs;
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};

/// Resolves the service settings from CLI flags, environment and config file.
pub fn load_config(service: &ServiceArgs) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default();

    let options = ResolveOptions {
        endpoint: service.endpoint.clone(),
        timeout_secs: service.timeout_secs,
    };

    resolve_config(&options, &file_config)
}
