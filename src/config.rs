//! Configuration loading and resolution.

use std::str::FromStr;

/// Default port the HTTP server listens on.
pub const DEFAULT_PORT: u16 = 8000;

/// Default base URL the country name is appended to.
pub const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org/wiki/";

/// Default outbound request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Runtime configuration for the outline service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server binds on (loopback only).
    pub port: u16,
    /// Base URL the country name is appended to as a path segment.
    pub base_url: String,
    /// Outbound request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Config {
    /// Resolve each setting: explicit flag, then environment, then default.
    ///
    /// Environment variables: `CONTOUR_PORT`, `CONTOUR_BASE_URL`,
    /// `CONTOUR_TIMEOUT_MS`.
    pub fn resolve(port: Option<u16>, base_url: Option<String>, timeout_ms: Option<u64>) -> Self {
        Self {
            port: port
                .or_else(|| env_parse("CONTOUR_PORT"))
                .unwrap_or(DEFAULT_PORT),
            base_url: base_url
                .or_else(|| std::env::var("CONTOUR_BASE_URL").ok())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout_ms: timeout_ms
                .or_else(|| env_parse("CONTOUR_TIMEOUT_MS"))
                .unwrap_or(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.base_url, "https://en.wikipedia.org/wiki/");
        assert_eq!(config.timeout_ms, 30_000);
    }

    #[test]
    fn test_explicit_flags_win() {
        let config = Config::resolve(Some(9999), Some("http://localhost/wiki/".into()), Some(250));
        assert_eq!(config.port, 9999);
        assert_eq!(config.base_url, "http://localhost/wiki/");
        assert_eq!(config.timeout_ms, 250);
    }

    // Environment cases run in one test: parallel tests share the
    // process environment.
    #[test]
    fn test_env_resolution() {
        std::env::set_var("CONTOUR_PORT", "4321");
        std::env::set_var("CONTOUR_TIMEOUT_MS", "1500");
        let config = Config::resolve(None, None, None);
        assert_eq!(config.port, 4321);
        assert_eq!(config.timeout_ms, 1500);

        // Explicit flag still wins over the environment.
        let config = Config::resolve(Some(9999), None, None);
        assert_eq!(config.port, 9999);

        // Unparseable values fall back to the default.
        std::env::set_var("CONTOUR_PORT", "not-a-port");
        let config = Config::resolve(None, None, None);
        assert_eq!(config.port, DEFAULT_PORT);

        std::env::remove_var("CONTOUR_PORT");
        std::env::remove_var("CONTOUR_TIMEOUT_MS");
    }
}
