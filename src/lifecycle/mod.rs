//! Lifecycle management subsystem.
//!
//! # States
//! ```text
//! Starting ──bind ok──▶ Serving ──signal──▶ Draining ──drained──▶ Stopped
//!     │                                         │
//!     └──bind error──▶ Stopped (fatal)          └──timeout──▶ Stopped (fatal)
//! ```
//!
//! # Design Decisions
//! - Signals are observed on a dedicated task, never in the accept loop
//! - Only the first signal starts the drain; later ones are ignored
//! - The drain is bounded; exceeding it is reported as a fatal error

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::{SignalListener, TerminationSignal};
