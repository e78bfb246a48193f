//! OS signal handling.
//!
//! SIGINT, SIGTERM and SIGQUIT all request a graceful shutdown. Handlers
//! are registered up front so a registration failure stops startup before
//! the listener is bound. Signals after the first are logged and ignored.

use std::fmt;
use std::io;

use tokio::task::JoinHandle;

use crate::lifecycle::Shutdown;

/// A signal that requests termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    Interrupt,
    Terminate,
    Quit,
}

impl fmt::Display for TerminationSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TerminationSignal::Interrupt => "SIGINT",
            TerminationSignal::Terminate => "SIGTERM",
            TerminationSignal::Quit => "SIGQUIT",
        };
        f.write_str(name)
    }
}

/// Registered termination signal streams.
#[cfg(unix)]
pub struct SignalListener {
    interrupt: tokio::signal::unix::Signal,
    terminate: tokio::signal::unix::Signal,
    quit: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl SignalListener {
    /// Register handlers for every termination signal.
    pub fn install() -> io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
            quit: signal(SignalKind::quit())?,
        })
    }

    /// Wait for the next termination signal.
    pub async fn recv(&mut self) -> Option<TerminationSignal> {
        tokio::select! {
            Some(()) = self.interrupt.recv() => Some(TerminationSignal::Interrupt),
            Some(()) = self.terminate.recv() => Some(TerminationSignal::Terminate),
            Some(()) = self.quit.recv() => Some(TerminationSignal::Quit),
            else => None,
        }
    }
}

/// Registered termination signal streams (Ctrl-C only).
#[cfg(not(unix))]
pub struct SignalListener {
    _private: (),
}

#[cfg(not(unix))]
impl SignalListener {
    pub fn install() -> io::Result<Self> {
        Ok(Self { _private: () })
    }

    pub async fn recv(&mut self) -> Option<TerminationSignal> {
        tokio::signal::ctrl_c()
            .await
            .ok()
            .map(|()| TerminationSignal::Interrupt)
    }
}

/// Spawn the task that turns termination signals into a shutdown trigger.
pub fn spawn(mut signals: SignalListener, shutdown: Shutdown) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(signal) = signals.recv().await {
            if shutdown.trigger() {
                tracing::info!(signal = %signal, "Termination signal received, shutting down");
            } else {
                tracing::info!(signal = %signal, "Shutdown already in progress, ignoring signal");
            }
        }
    })
}
