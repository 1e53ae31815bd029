use anyhow::{Context, Result, bail};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::paths;

/// Endpoint used when neither the CLI, the environment nor the config file
/// names one.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

/// Seconds to wait for a reply before falling back.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Environment variable that overrides the configured endpoint.
pub const ENDPOINT_ENV: &str = "TALK_ENDPOINT";

/// Settings in the `[talk]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalkConfig {
    /// Base URL of the chat service.
    pub endpoint: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/talk/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub talk: TalkConfig,
}

/// Configuration after merging CLI arguments, environment and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// The chat service base URL.
    pub endpoint: String,
    /// How long a single request may take.
    pub timeout: Duration,
}

/// CLI overrides that take precedence over everything else.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Resolves configuration by merging CLI options, the `TALK_ENDPOINT`
/// environment variable and config file settings, in that order.
///
/// # Errors
///
/// Returns an error if the endpoint is not an `http`/`https` URL or the
/// timeout is zero.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let endpoint = options
        .endpoint
        .clone()
        .or_else(|| std::env::var(ENDPOINT_ENV).ok().filter(|v| !v.is_empty()))
        .or_else(|| config_file.talk.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    validate_endpoint(&endpoint)?;

    let timeout_secs = options
        .timeout_secs
        .or(config_file.talk.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    if timeout_secs == 0 {
        bail!(
            "Invalid timeout: must be at least 1 second\n\n\
             Set it via:\n  \
             - CLI option: talk --timeout <secs>\n  \
             - Config file: ~/.config/talk/config.toml"
        );
    }

    Ok(ResolvedConfig {
        endpoint,
        timeout: Duration::from_secs(timeout_secs),
    })
}

fn validate_endpoint(endpoint: &str) -> Result<()> {
    let url = Url::parse(endpoint).with_context(|| format!("Invalid endpoint URL: {endpoint}"))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => bail!(
            "Invalid endpoint URL: {endpoint}\n\n\
             Unsupported scheme '{scheme}' (expected http or https)"
        ),
    }
}

/// Manages loading and saving the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/talk/config.toml`
    /// or `~/.config/talk/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a config manager for an explicit file path.
    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file, falling back to defaults if it is missing or
    /// unreadable. Parse failures are logged.
    pub fn load_or_default(&self) -> ConfigFile {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                if self.config_path.exists() {
                    tracing::warn!("{e:#}");
                }
                ConfigFile::default()
            }
        }
    }
}
