//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! LISTEN_ADDRESS
//!     → listener.rs (normalize, bind)
//!     → axum::serve (accept loop, one task per connection)
//!     → inflight.rs (per-request tracking for the drain phase)
//! ```

pub mod inflight;
pub mod listener;

pub use inflight::{InFlightGuard, InFlightTracker};
pub use listener::{bind, ListenerError};
