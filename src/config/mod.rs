//! Configuration file management and resolution.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, ENDPOINT_ENV,
    ResolveOptions, ResolvedConfig, TalkConfig, resolve_config,
};
