//! HTTP redirect responder library.
//!
//! Answers every request with a redirect whose `Location` is rebuilt from
//! the request, with optional per-component overrides, and drains
//! gracefully on SIGINT/SIGTERM/SIGQUIT.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::schema::RedirectConfig;
pub use error::Error;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
