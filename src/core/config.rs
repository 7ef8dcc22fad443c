//! Host configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::time::Duration;

pub const DEFAULT_UPSTREAM_URL: &str = "http://localhost:8000";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Host configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the fashion AI backend that serves `/api/*`
    /// Example: http://localhost:8000
    pub upstream_url: String,

    /// Upper bound for one proxied request, uploads and image generation included
    pub proxy_timeout: Duration,

    /// `tracing_subscriber::EnvFilter` directives
    /// Example: info,vastravaani=debug
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank and unparsable values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            upstream_url: non_blank("API_UPSTREAM_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string()),
            proxy_timeout: Duration::from_secs(
                non_blank("PROXY_TIMEOUT_SECS")
                    .and_then(|v| v.trim().parse().ok())
                    .filter(|secs| *secs > 0)
                    .unwrap_or(DEFAULT_PROXY_TIMEOUT_SECS),
            ),
            log_filter: non_blank("LOG_FILTER").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.upstream_url, "http://localhost:8000");
        assert_eq!(config.proxy_timeout, Duration::from_secs(120));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_all_fields() {
        let config = config_from(&[
            ("API_UPSTREAM_URL", "https://ai.example.com"),
            ("PROXY_TIMEOUT_SECS", "30"),
            ("LOG_FILTER", "warn,vastravaani=debug"),
        ]);
        assert_eq!(config.upstream_url, "https://ai.example.com");
        assert_eq!(config.proxy_timeout, Duration::from_secs(30));
        assert_eq!(config.log_filter, "warn,vastravaani=debug");
    }

    #[test]
    fn test_upstream_trailing_slash_is_dropped() {
        let config = config_from(&[("API_UPSTREAM_URL", "http://backend:8000/ ")]);
        assert_eq!(config.upstream_url, "http://backend:8000");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("API_UPSTREAM_URL", "   "),
            ("PROXY_TIMEOUT_SECS", "soon"),
            ("LOG_FILTER", ""),
        ]);
        assert_eq!(config, Config::default());

        let config = config_from(&[("PROXY_TIMEOUT_SECS", "0")]);
        assert_eq!(config.proxy_timeout, Duration::from_secs(120));
    }
}
