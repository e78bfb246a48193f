//! Configuration resolution.
//!
//! Every setting is independent and falls back to a fixed default when its
//! key is absent.

use crate::config::schema::{RedirectConfig, DEFAULT_LISTEN_ADDRESS, DEFAULT_SCHEME};
use crate::config::source::{ConfigSource, Environment};
use crate::config::validation::parse_status_code;

pub const LISTEN_ADDRESS: &str = "LISTEN_ADDRESS";
pub const HOST_OVERRIDE: &str = "HOST_OVERRIDE";
pub const PATH_OVERRIDE: &str = "PATH_OVERRIDE";
pub const QUERY_OVERRIDE: &str = "QUERY_OVERRIDE";
pub const SCHEME_OVERRIDE: &str = "SCHEME_OVERRIDE";
pub const STATUS_CODE: &str = "STATUS_CODE";
pub const METRICS_ADDRESS: &str = "METRICS_ADDRESS";

/// Error type for configuration resolution.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config error [{key}]: {value:?} is not an integer")]
    NotAnInteger { key: &'static str, value: String },

    #[error("config error [{key}]: {value:?} is not a valid HTTP status code (100-999)")]
    InvalidStatusCode { key: &'static str, value: String },
}

/// Resolve the configuration from `source`.
pub fn resolve_config<S: ConfigSource>(source: &S) -> Result<RedirectConfig, ConfigError> {
    let mut config = RedirectConfig::default();

    config.listen_address = source
        .get(LISTEN_ADDRESS)
        .unwrap_or_else(|| DEFAULT_LISTEN_ADDRESS.to_string());

    config.overrides.host = source.get(HOST_OVERRIDE);
    config.overrides.path = source.get(PATH_OVERRIDE);
    config.overrides.query = source.get(QUERY_OVERRIDE);
    config.overrides.scheme = Some(
        source
            .get(SCHEME_OVERRIDE)
            .unwrap_or_else(|| DEFAULT_SCHEME.to_string()),
    );

    if let Some(raw) = source.get(STATUS_CODE) {
        config.status_code = parse_status_code(STATUS_CODE, &raw)?;
    }

    config.metrics_address = source.get(METRICS_ADDRESS);

    Ok(config)
}

impl RedirectConfig {
    /// Resolve the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        resolve_config(&Environment)
    }
}
