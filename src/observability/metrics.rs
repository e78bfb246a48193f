//! Metrics collection and exposition.
//!
//! # Metrics
//! - `redirect_requests_total` (counter): redirects by method, status
//! - `redirect_in_flight_requests` (gauge): requests currently being handled
//!
//! Without an installed exporter the macros are no-ops.

use std::net::{AddrParseError, SocketAddr};

use axum::http::{Method, StatusCode};
use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::net::listener::normalize_address;

pub const REQUESTS_TOTAL: &str = "redirect_requests_total";
pub const IN_FLIGHT_REQUESTS: &str = "redirect_in_flight_requests";

/// Error type for exporter setup.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("invalid metrics address {address:?}: {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: AddrParseError,
    },

    #[error("failed to install Prometheus exporter: {0}")]
    Install(#[from] BuildError),
}

/// Install the Prometheus exporter on `address`. Must run inside a Tokio runtime.
pub fn init_metrics(address: &str) -> Result<SocketAddr, MetricsError> {
    let addr: SocketAddr = normalize_address(address)
        .parse()
        .map_err(|source| MetricsError::InvalidAddress {
            address: address.to_string(),
            source,
        })?;

    PrometheusBuilder::new().with_http_listener(addr).install()?;

    describe_counter!(REQUESTS_TOTAL, "Redirect responses sent");
    describe_gauge!(IN_FLIGHT_REQUESTS, "Requests currently being handled");

    Ok(addr)
}

/// Count one redirect response.
pub fn record_redirect(method: &Method, status: StatusCode) {
    counter!(
        REQUESTS_TOTAL,
        "method" => method.as_str().to_owned(),
        "status" => status.as_u16().to_string()
    )
    .increment(1);
}

pub fn increment_in_flight() {
    gauge!(IN_FLIGHT_REQUESTS).increment(1.0);
}

pub fn decrement_in_flight() {
    gauge!(IN_FLIGHT_REQUESTS).decrement(1.0);
}
