//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_CF_API_BASE_URL, DEFAULT_CF_REQUEST_TIMEOUT_SECONDS, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, rate_limits,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub codeforces: CodeforcesConfig,
    pub rate_limit: RateLimitConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Upstream Codeforces API configuration
#[derive(Debug, Clone)]
pub struct CodeforcesConfig {
    pub api_base_url: String,
    pub request_timeout_seconds: u64,
}

/// Rate limiting configuration
///
/// When `redis_url` is set the limiter uses a shared Redis-backed store,
/// otherwise it falls back to an in-process sliding-window store.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window_seconds: u64,
    pub redis_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            codeforces: CodeforcesConfig::from_env()?,
            rate_limit: RateLimitConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl CodeforcesConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: env::var("CF_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_CF_API_BASE_URL.to_string()),
            request_timeout_seconds: env::var("CF_REQUEST_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| DEFAULT_CF_REQUEST_TIMEOUT_SECONDS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CF_REQUEST_TIMEOUT_SECONDS".to_string()))?,
        })
    }
}

impl RateLimitConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            max_requests: env::var("RATE_LIMIT_MAX_REQUESTS")
                .unwrap_or_else(|_| rate_limits::STATS_MAX_REQUESTS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("RATE_LIMIT_MAX_REQUESTS".to_string()))?,
            window_seconds: env::var("RATE_LIMIT_WINDOW_SECS")
                .unwrap_or_else(|_| rate_limits::STATS_WINDOW_SECS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("RATE_LIMIT_WINDOW_SECS".to_string()))?,
            redis_url: env::var("REDIS_URL").ok(),
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::rate_limits;

    #[test]
    fn test_default_values() {
        // Test that defaults are applied when env vars are not set
        let server = ServerConfig {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: "info".to_string(),
        };
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
    }

    #[test]
    fn test_rate_limit_defaults() {
        let rate_limit = RateLimitConfig {
            max_requests: rate_limits::STATS_MAX_REQUESTS,
            window_seconds: rate_limits::STATS_WINDOW_SECS,
            redis_url: None,
        };
        assert_eq!(rate_limit.max_requests, 10);
        assert_eq!(rate_limit.window_seconds, 60);
    }
}
