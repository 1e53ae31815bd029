//! Configure command handler for editing default settings.

use anyhow::{Context, Result, bail};
use inquire::Text;

use crate::config::{
    ConfigFile, ConfigManager, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, ResolveOptions, TalkConfig,
    resolve_config,
};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the stored settings. Otherwise prompts for the
/// endpoint and timeout and saves them.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;

    if show {
        print_current_defaults(&manager.load_or_default());
        println!(
            "{}",
            Style::secondary(manager.config_path().display().to_string())
        );
        return Ok(());
    }

    handle_prompt_cancellation(|| run_configure_inner(&manager))
}

fn run_configure_inner(manager: &ConfigManager) -> Result<()> {
    let mut config = manager.load_or_default();

    print_current_defaults(&config);

    let endpoint = prompt_endpoint(config.talk.endpoint.as_deref())?;
    let timeout_secs = prompt_timeout(config.talk.timeout_secs)?;

    // Reject anything the client would refuse at startup.
    let options = ResolveOptions {
        endpoint: Some(endpoint.clone()),
        timeout_secs: Some(timeout_secs),
    };
    resolve_config(&options, &ConfigFile::default())?;

    config.talk = TalkConfig {
        endpoint: Some(endpoint),
        timeout_secs: Some(timeout_secs),
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile) {
    println!("{}", Style::header("Current settings"));
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        config.talk.endpoint.as_deref().map_or_else(
            || Style::secondary(format!("(not set, using {DEFAULT_ENDPOINT})")),
            Style::value
        )
    );
    println!(
        "  {}   {}",
        Style::label("timeout"),
        config.talk.timeout_secs.map_or_else(
            || Style::secondary(format!("(not set, using {DEFAULT_TIMEOUT_SECS}s)")),
            |secs| Style::value(format!("{secs}s"))
        )
    );
    println!();
}

fn prompt_endpoint(current: Option<&str>) -> Result<String> {
    let endpoint = Text::new("Chat service endpoint:")
        .with_default(current.unwrap_or(DEFAULT_ENDPOINT))
        .with_help_message("Base URL; requests go to <endpoint>/chat")
        .prompt()?;

    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        bail!("Endpoint cannot be empty");
    }

    Ok(endpoint.to_string())
}

fn prompt_timeout(current: Option<u64>) -> Result<u64> {
    let default = current.unwrap_or(DEFAULT_TIMEOUT_SECS).to_string();
    let input = Text::new("Request timeout (seconds):")
        .with_default(&default)
        .prompt()?;

    parse_timeout(&input)
}

fn parse_timeout(input: &str) -> Result<u64> {
    let secs: u64 = input
        .trim()
        .parse()
        .with_context(|| format!("Invalid timeout: '{}'", input.trim()))?;

    if secs == 0 {
        bail!("Timeout must be at least 1 second");
    }

    Ok(secs)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timeout_valid() {
        assert_eq!(parse_timeout("30").unwrap(), 30);
        assert_eq!(parse_timeout(" 5 ").unwrap(), 5);
    }

    #[test]
    fn test_parse_timeout_rejects_zero() {
        assert!(parse_timeout("0").unwrap_err().to_string().contains("at least"));
    }

    #[test]
    fn test_parse_timeout_rejects_garbage() {
        assert!(parse_timeout("soon").unwrap_err().to_string().contains("Invalid"));
        assert!(parse_timeout("-3").is_err());
    }
}
