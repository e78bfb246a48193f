//! Redirect target construction.
//!
//! Each of scheme, host, path and query is taken from the configured
//! override when present and from the incoming request otherwise. The
//! incoming scheme is never inspected: without an override it is `http`.

use std::fmt;

use axum::http::header::{InvalidHeaderValue, HOST};
use axum::http::{HeaderMap, HeaderValue, Uri};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC};

use crate::config::Overrides;

/// Scheme used when no scheme override is configured.
pub const FALLBACK_SCHEME: &str = "http";

/// Bytes that cannot appear verbatim in a header value. Non-ASCII is
/// always encoded.
const HEADER_UNSAFE: &AsciiSet = &CONTROLS.add(b' ');

/// Bytes escaped in a path override: everything but unreserved
/// characters and `$&+,/:;=@`.
const PATH_OVERRIDE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b',')
    .remove(b'/')
    .remove(b':')
    .remove(b';')
    .remove(b'=')
    .remove(b'@');

/// The URL written into the `Location` header.
///
/// Components are stored in their serialized (escaped) form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    scheme: String,
    host: String,
    path: String,
    query: String,
}

impl RedirectTarget {
    /// Compute the target for a request.
    pub fn resolve(uri: &Uri, headers: &HeaderMap, overrides: &Overrides) -> Self {
        let scheme = match &overrides.scheme {
            Some(scheme) => header_safe(scheme),
            None => FALLBACK_SCHEME.to_string(),
        };

        let host = match &overrides.host {
            Some(host) => header_safe(host),
            None => header_safe(&request_host(uri, headers)),
        };

        let path = match &overrides.path {
            Some(path) => escape_path(path),
            None => header_safe(uri.path()),
        };

        let query = match &overrides.query {
            Some(query) => header_safe(query),
            None => header_safe(uri.query().unwrap_or_default()),
        };

        Self {
            scheme,
            host,
            path,
            query,
        }
    }

    /// Serialize into a header value.
    ///
    /// Every component is escaped to visible ASCII, so this only fails if
    /// that invariant is broken.
    pub fn to_header_value(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        HeaderValue::try_from(self.to_string())
    }
}

impl fmt::Display for RedirectTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scheme.is_empty() {
            write!(f, "{}:", self.scheme)?;
        }

        if !self.scheme.is_empty() || !self.host.is_empty() {
            if !self.host.is_empty() || !self.path.is_empty() {
                f.write_str("//")?;
            }
            f.write_str(&self.host)?;
        }

        if !self.path.is_empty() && !self.path.starts_with('/') {
            if !self.host.is_empty() {
                f.write_str("/")?;
            } else if self.scheme.is_empty() && first_segment_has_colon(&self.path) {
                // Keep a relative path from being read as a scheme.
                f.write_str("./")?;
            }
        }
        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }

        Ok(())
    }
}

/// Host as the client addressed it: URI authority (HTTP/2, absolute-form),
/// else the `Host` header, else empty.
fn request_host(uri: &Uri, headers: &HeaderMap) -> String {
    if let Some(authority) = uri.authority() {
        let authority = authority.as_str();
        let host = authority.rsplit('@').next().unwrap_or(authority);
        return host.to_string();
    }

    headers
        .get(HOST)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .unwrap_or_default()
}

fn first_segment_has_colon(path: &str) -> bool {
    path.split('/').next().is_some_and(|segment| segment.contains(':'))
}

fn header_safe(input: &str) -> String {
    utf8_percent_encode(input, HEADER_UNSAFE).to_string()
}

/// Encode a path override as a decoded path. A lone `*` stays as is.
fn escape_path(path: &str) -> String {
    if path == "*" {
        return path.to_string();
    }
    utf8_percent_encode(path, PATH_OVERRIDE).to_string()
}
