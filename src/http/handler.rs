//! The redirect handler.
//!
//! Every request, whatever its method or path, gets the configured status
//! and a `Location` header. The body is never read.

use axum::{
    extract::State,
    http::{header::LOCATION, HeaderMap, Method, Uri},
    response::{IntoResponse, Response},
};

use crate::http::server::AppState;
use crate::http::target::RedirectTarget;
use crate::observability::metrics;

/// Answer a request with a redirect.
pub async fn redirect_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let target = RedirectTarget::resolve(&uri, &headers, &state.config.overrides);
    let status = state.config.status_code;

    let mut response = status.into_response();
    match target.to_header_value() {
        Ok(location) => {
            response.headers_mut().insert(LOCATION, location);
        }
        Err(error) => {
            tracing::warn!(
                location = %target,
                error = %error,
                "Location not representable as a header"
            );
        }
    }

    tracing::debug!(
        method = %method,
        path = %uri.path(),
        location = %target,
        status = status.as_u16(),
        "Redirecting"
    );
    metrics::record_redirect(&method, status);

    response
}
