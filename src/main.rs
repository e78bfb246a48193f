//! HTTP redirect responder.
//!
//! ```text
//!   env ──▶ config ──▶ HttpServer ◀── Shutdown ◀── signals task
//!                          │
//!   request ──▶ handler ──▶ 301 Location: https://host/path?query
//! ```

use std::process::ExitCode;

use redirect_responder::config::validation;
use redirect_responder::lifecycle::{signals, SignalListener};
use redirect_responder::observability::{logging, metrics};
use redirect_responder::{net, Error, HttpServer, RedirectConfig, Shutdown};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "redirect-responder starting");

    match run().await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!(error = %error, "Fatal error");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Error> {
    let config = RedirectConfig::from_env()?;

    tracing::info!(
        listen_address = %config.listen_address,
        status_code = config.status_code.as_u16(),
        scheme_override = ?config.overrides.scheme,
        host_override = ?config.overrides.host,
        path_override = ?config.overrides.path,
        query_override = ?config.overrides.query,
        "Configuration loaded"
    );
    for warning in validation::warnings(&config) {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    if let Some(address) = &config.metrics_address {
        let addr = metrics::init_metrics(address)?;
        tracing::info!(address = %addr, "Metrics exporter listening");
    }

    let shutdown = Shutdown::new();
    let signals = SignalListener::install().map_err(Error::Signals)?;
    signals::spawn(signals, shutdown.clone());

    let listener = net::bind(&config.listen_address).await?;

    HttpServer::new(config).run(listener, shutdown).await
}
