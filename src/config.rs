//! Gateway configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).
//!
//! | Variable                  | Default        |
//! |---------------------------|----------------|
//! | `LISTEN_ADDR`             | `0.0.0.0:5000` |
//! | `CATALOG_PATH`            | built-in seed  |
//! | `UPSTREAM_TIMEOUT_SECS`   | `0` (none)     |
//! | `TRUST_FORWARDED_PROTO`   | `false`        |
//! | `LOG_FORMAT`              | `text`         |

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:5000`).
    pub listen_addr: SocketAddr,

    /// JSON catalog file. `None` uses the built-in collection.
    pub catalog_path: Option<PathBuf>,

    /// Timeout for delegated lookups, in seconds. `0` disables it.
    pub upstream_timeout_secs: u64,

    /// Honour `X-Forwarded-Proto` when rebuilding delegated URLs.
    pub trust_forwarded_proto: bool,

    /// Tracing output format.
    pub log_format: LogFormat,
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, std::net::AddrParseError> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:5000".to_string())
            .parse()?;

        let catalog_path = std::env::var("CATALOG_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let upstream_timeout_secs = parse_env("UPSTREAM_TIMEOUT_SECS", 0);
        let trust_forwarded_proto = parse_env_bool("TRUST_FORWARDED_PROTO", false);
        let log_format = parse_log_format(std::env::var("LOG_FORMAT").ok().as_deref());

        Ok(Self {
            listen_addr,
            catalog_path,
            upstream_timeout_secs,
            trust_forwarded_proto,
            log_format,
        })
    }

    /// Returns the delegated lookup timeout, or `None` when disabled.
    #[must_use]
    pub fn upstream_timeout(&self) -> Option<Duration> {
        (self.upstream_timeout_secs > 0).then(|| Duration::from_secs(self.upstream_timeout_secs))
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            catalog_path: None,
            upstream_timeout_secs: 0,
            trust_forwarded_proto: false,
            log_format: LogFormat::Text,
        }
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parses an environment variable as a boolean. Accepts `"true"`, `"1"`,
/// `"false"`, `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_env_bool(key: &str, default: bool) -> bool {
    parse_bool(std::env::var(key).ok().as_deref(), default)
}

fn parse_bool(value: Option<&str>, default: bool) -> bool {
    match value.map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => true,
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => false,
        _ => default,
    }
}

fn parse_log_format(value: Option<&str>) -> LogFormat {
    match value.map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
        _ => LogFormat::Text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_parsing() {
        assert!(parse_bool(Some("TRUE"), false));
        assert!(parse_bool(Some("1"), false));
        assert!(!parse_bool(Some("False"), true));
        assert!(!parse_bool(Some("0"), true));
        assert!(parse_bool(Some("maybe"), true));
        assert!(!parse_bool(None, false));
    }

    #[test]
    fn log_format_parsing() {
        assert_eq!(parse_log_format(Some("json")), LogFormat::Json);
        assert_eq!(parse_log_format(Some("JSON ")), LogFormat::Json);
        assert_eq!(parse_log_format(Some("pretty")), LogFormat::Text);
        assert_eq!(parse_log_format(None), LogFormat::Text);
    }

    #[test]
    fn zero_timeout_disables_it() {
        let config = GatewayConfig::default();
        assert_eq!(config.upstream_timeout(), None);

        let config = GatewayConfig {
            upstream_timeout_secs: 3,
            ..GatewayConfig::default()
        };
        assert_eq!(config.upstream_timeout(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn unset_variable_uses_default() {
        assert_eq!(parse_env("BOOK_CATALOG_TEST_UNSET_VARIABLE", 7_u64), 7);
    }
}
