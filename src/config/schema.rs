//! Configuration schema definitions.
//!
//! The resolved configuration is a plain value: built once at startup by
//! [`crate::config::loader`], then shared read-only with every request task.

use axum::http::StatusCode;

/// Default bind address (all interfaces, port 8080).
pub const DEFAULT_LISTEN_ADDRESS: &str = ":8080";

/// Scheme written into every `Location` header unless overridden.
pub const DEFAULT_SCHEME: &str = "https";

/// Status code emitted when `STATUS_CODE` is not set.
pub const DEFAULT_STATUS_CODE: StatusCode = StatusCode::MOVED_PERMANENTLY;

/// Root configuration for the redirect responder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectConfig {
    /// Address to bind, `host:port` or the `:port` shorthand.
    pub listen_address: String,

    /// Per-component overrides applied to every redirect target.
    pub overrides: Overrides,

    /// Status code for every response.
    pub status_code: StatusCode,

    /// Optional Prometheus exporter address. `None` disables metrics.
    pub metrics_address: Option<String>,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            listen_address: DEFAULT_LISTEN_ADDRESS.to_string(),
            overrides: Overrides::default(),
            status_code: DEFAULT_STATUS_CODE,
            metrics_address: None,
        }
    }
}

/// Replacement values for the components of the redirect target.
///
/// `None` means "take the component from the request". `Some("")` is a real
/// override that empties the component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overrides {
    pub scheme: Option<String>,
    pub host: Option<String>,
    pub path: Option<String>,
    pub query: Option<String>,
}

impl Default for Overrides {
    /// Scheme defaults to a present `https` override; the rest pass through.
    fn default() -> Self {
        Self {
            scheme: Some(DEFAULT_SCHEME.to_string()),
            host: None,
            path: None,
            query: None,
        }
    }
}

impl Overrides {
    /// Overrides with nothing set, not even the scheme.
    pub fn none() -> Self {
        Self {
            scheme: None,
            host: None,
            path: None,
            query: None,
        }
    }
}
