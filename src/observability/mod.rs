//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, gauges; exported only if METRICS_ADDRESS is set)
//! ```

pub mod logging;
pub mod metrics;
