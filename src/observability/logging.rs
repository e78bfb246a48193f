//! Structured logging.
//!
//! `RUST_LOG` selects levels (default `redirect_responder=info,tower_http=info`).
//! `LOG_FORMAT=json` switches to JSON lines; anything else is human-readable.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "redirect_responder=info,tower_http=info";

/// Output format of the fmt layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value. `None` for unknown formats.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "text" | "pretty" => Some(LogFormat::Text),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// Install the global subscriber.
pub fn init() {
    let raw_format = std::env::var("LOG_FORMAT").ok();
    let format = raw_format
        .as_deref()
        .map(LogFormat::parse)
        .unwrap_or(Some(LogFormat::Text));

    let registry = tracing_subscriber::registry().with(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()),
    );

    match format.unwrap_or_default() {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    if format.is_none() {
        tracing::warn!(
            log_format = raw_format.as_deref().unwrap_or_default(),
            "Unknown LOG_FORMAT, using text"
        );
    }
}
