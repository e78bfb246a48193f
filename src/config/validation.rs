//! Configuration validation.
//!
//! Semantic checks that run while the configuration is resolved. Hard
//! failures abort startup; soft findings are returned as warnings for the
//! caller to log.

use axum::http::StatusCode;

use crate::config::loader::ConfigError;
use crate::config::schema::RedirectConfig;

/// Parse a raw status code setting.
///
/// Accepts anything the integer parser accepts (optional sign, leading
/// zeros), then requires a code that fits a status line.
pub fn parse_status_code(key: &'static str, raw: &str) -> Result<StatusCode, ConfigError> {
    let value: i64 = raw.parse().map_err(|_| ConfigError::NotAnInteger {
        key,
        value: raw.to_string(),
    })?;

    u16::try_from(value)
        .ok()
        .and_then(|code| StatusCode::from_u16(code).ok())
        .ok_or_else(|| ConfigError::InvalidStatusCode {
            key,
            value: raw.to_string(),
        })
}

/// A non-fatal finding about a resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// Clients will not follow `Location` for a non-3xx status.
    NotARedirect(StatusCode),
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationWarning::NotARedirect(code) => {
                write!(f, "status code {} is not a redirect status", code.as_u16())
            }
        }
    }
}

/// Collect warnings for a configuration that already passed hard checks.
pub fn warnings(config: &RedirectConfig) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    if !config.status_code.is_redirection() {
        warnings.push(ValidationWarning::NotARedirect(config.status_code));
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_signed_integers() {
        let parse = |raw: &str| parse_status_code("STATUS_CODE", raw).unwrap();
        assert_eq!(parse("307"), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(parse("+302"), StatusCode::FOUND);
        assert_eq!(parse("0308"), StatusCode::PERMANENT_REDIRECT);
    }

    #[test]
    fn rejects_non_integers() {
        for raw in ["abc", "", " 301", "301 ", "3.01", "99999999999999999999"] {
            let err = parse_status_code("STATUS_CODE", raw).unwrap_err();
            assert!(
                matches!(
                    err,
                    ConfigError::NotAnInteger { key: "STATUS_CODE", ref value } if value == raw
                ),
                "{raw:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn rejects_codes_outside_status_line_range() {
        for raw in ["-301", "0", "99", "1000", "70000"] {
            let err = parse_status_code("STATUS_CODE", raw).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidStatusCode { .. }), "{raw:?} gave {err:?}");
        }
    }

    #[test]
    fn warns_on_non_redirect_status() {
        let mut config = RedirectConfig::default();
        assert!(warnings(&config).is_empty());

        config.status_code = StatusCode::OK;
        assert_eq!(warnings(&config), vec![ValidationWarning::NotARedirect(StatusCode::OK)]);
    }
}
