//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, drain)
//!     → handler.rs (status + Location, body untouched)
//!     → target.rs (scheme/host/path/query with overrides)
//!     → Send to client
//! ```

pub mod handler;
pub mod server;
pub mod target;

pub use server::{AppState, HttpServer, DRAIN_TIMEOUT};
pub use target::RedirectTarget;
