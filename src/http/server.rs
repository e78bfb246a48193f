//! HTTP server setup and the serve/drain sequence.
//!
//! # Responsibilities
//! - Build the Axum router (one fallback handler, no routing)
//! - Wire up middleware (tracing, in-flight tracking)
//! - Serve until shutdown, then drain within a fixed budget

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::RedirectConfig;
use crate::error::Error;
use crate::http::handler::redirect_handler;
use crate::lifecycle::Shutdown;
use crate::net::InFlightTracker;

/// How long in-flight requests get to finish after a shutdown signal.
pub const DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RedirectConfig>,
}

/// HTTP server for the redirect responder.
pub struct HttpServer {
    /// Handler plus any caller-supplied layers; tracking and tracing wrap it.
    app: Router,
    config: Arc<RedirectConfig>,
    in_flight: InFlightTracker,
    drain_timeout: Duration,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RedirectConfig) -> Self {
        let config = Arc::new(config);
        let in_flight = InFlightTracker::new();
        let state = AppState {
            config: Arc::clone(&config),
        };

        let app = Router::new().fallback(redirect_handler).with_state(state);
        Self {
            app,
            config,
            in_flight,
            drain_timeout: DRAIN_TIMEOUT,
        }
    }

    /// Replace the drain budget.
    pub fn with_drain_timeout(mut self, drain_timeout: Duration) -> Self {
        self.drain_timeout = drain_timeout;
        self
    }

    /// Add middleware around the handler.
    ///
    /// Layers added here run inside request tracking, so their time counts
    /// as in flight during a drain.
    pub fn map_router(mut self, f: impl FnOnce(Router) -> Router) -> Self {
        self.app = f(self.app);
        self
    }

    /// The fully layered router.
    pub fn router(&self) -> Router {
        self.app
            .clone()
            .layer(middleware::from_fn_with_state(
                self.in_flight.clone(),
                track_in_flight,
            ))
            .layer(TraceLayer::new_for_http())
    }

    /// Serve on `listener` until `shutdown` fires, then drain.
    ///
    /// Once shutdown is triggered no new connections are accepted. Requests
    /// already in flight get `drain_timeout` to finish; if they don't,
    /// [`Error::DrainTimeout`] is returned and the caller is expected to exit,
    /// which closes whatever is left.
    pub async fn run(self, listener: TcpListener, shutdown: Shutdown) -> Result<(), Error> {
        let addr = listener.local_addr().map_err(Error::Serve)?;
        tracing::info!(
            address = %addr,
            status_code = self.config.status_code.as_u16(),
            "HTTP server starting"
        );

        let serve = axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown.wait())
            .into_future();
        let mut serve = std::pin::pin!(serve);

        tokio::select! {
            result = &mut serve => {
                result.map_err(Error::Serve)?;
                tracing::info!("HTTP server stopped");
                return Ok(());
            }
            () = shutdown.wait() => {}
        }

        tracing::info!(
            timeout = ?self.drain_timeout,
            in_flight = self.in_flight.active_count(),
            "Draining connections"
        );

        match tokio::time::timeout(self.drain_timeout, serve).await {
            Ok(result) => {
                result.map_err(Error::Serve)?;
                tracing::info!("HTTP server drained");
                Ok(())
            }
            Err(_) => Err(Error::DrainTimeout {
                timeout: self.drain_timeout,
                in_flight: self.in_flight.active_count(),
            }),
        }
    }
}

async fn track_in_flight(
    State(in_flight): State<InFlightTracker>,
    request: Request,
    next: Next,
) -> Response {
    let _guard = in_flight.track();
    next.run(request).await
}
