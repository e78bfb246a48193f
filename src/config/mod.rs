//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! environment variables (or any ConfigSource)
//!     → loader.rs (per-key lookup, defaults)
//!     → validation.rs (status code checks, warnings)
//!     → RedirectConfig (immutable)
//!     → shared via Arc with every request task
//! ```
//!
//! # Design Decisions
//! - Config is immutable once resolved; there is no reload
//! - Every key has a default, so an empty environment is a valid config
//! - Overrides keep "unset" and "set to empty" apart

pub mod loader;
pub mod schema;
pub mod source;
pub mod validation;

pub use loader::{resolve_config, ConfigError};
pub use schema::{Overrides, RedirectConfig};
pub use source::{ConfigSource, Environment};
