//! Crate-level error type.
//!
//! Every variant is fatal: the binary logs it and exits non-zero.

use std::io;
use std::time::Duration;

use crate::config::ConfigError;
use crate::net::ListenerError;
use crate::observability::metrics::MetricsError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A setting could not be parsed. Raised before anything is bound.
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Listener(#[from] ListenerError),

    /// The serve loop failed for a reason other than shutdown.
    #[error("listen error: {0}")]
    Serve(#[source] io::Error),

    #[error("failed to install signal handlers: {0}")]
    Signals(#[source] io::Error),

    /// Connections were still open when the drain budget ran out.
    #[error("shutdown error, forcefully closing: {in_flight} request(s) still in flight after {timeout:?}")]
    DrainTimeout { timeout: Duration, in_flight: u64 },

    #[error(transparent)]
    Metrics(#[from] MetricsError),
}
