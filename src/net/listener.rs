//! TCP listener setup.
//!
//! # Responsibilities
//! - Accept `host:port`, `ip:port`, `[ipv6]:port` and the `:port` shorthand
//! - Bind the listener, reporting the address on failure

use std::borrow::Cow;
use std::io;

use tokio::net::TcpListener;

/// Error type for listener operations.
#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    /// Failed to bind to address.
    #[error("listen error: failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },
}

/// Expand the `:port` shorthand to all IPv4 interfaces.
pub fn normalize_address(address: &str) -> Cow<'_, str> {
    if address.starts_with(':') {
        Cow::Owned(format!("0.0.0.0{address}"))
    } else {
        Cow::Borrowed(address)
    }
}

/// Bind a TCP listener to `address`.
pub async fn bind(address: &str) -> Result<TcpListener, ListenerError> {
    let normalized = normalize_address(address);

    let listener = TcpListener::bind(normalized.as_ref())
        .await
        .map_err(|source| ListenerError::Bind {
            address: address.to_string(),
            source,
        })?;

    if let Ok(local_addr) = listener.local_addr() {
        tracing::info!(
            configured = %address,
            address = %local_addr,
            "Listener bound"
        );
    }

    Ok(listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_shorthand_binds_all_interfaces() {
        assert_eq!(normalize_address(":8080"), "0.0.0.0:8080");
        assert_eq!(normalize_address("127.0.0.1:8080"), "127.0.0.1:8080");
        assert_eq!(normalize_address("[::1]:8080"), "[::1]:8080");
        assert_eq!(normalize_address("localhost:8080"), "localhost:8080");
    }

    #[tokio::test]
    async fn binds_ephemeral_port() {
        let listener = bind("127.0.0.1:0").await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn bind_failure_names_address() {
        let taken = bind("127.0.0.1:0").await.unwrap();
        let address = taken.local_addr().unwrap().to_string();

        let err = bind(&address).await.unwrap_err();
        assert!(err.to_string().contains(&address), "{err}");
    }

    #[tokio::test]
    async fn malformed_address_is_a_bind_error() {
        let err = bind("not an address").await.unwrap_err();
        assert!(matches!(err, ListenerError::Bind { .. }));
    }
}
