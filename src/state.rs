//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::codeforces::CodeforcesClient;
use crate::config::Config;
use crate::middleware::RateLimitStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Upstream Codeforces API client
    codeforces: CodeforcesClient,

    /// Rate-limit store (in-memory or Redis)
    rate_limiter: Arc<dyn RateLimitStore>,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(
        codeforces: CodeforcesClient,
        rate_limiter: Arc<dyn RateLimitStore>,
        config: Config,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                codeforces,
                rate_limiter,
                config,
            }),
        }
    }

    /// Get a reference to the Codeforces client
    pub fn codeforces(&self) -> &CodeforcesClient {
        &self.inner.codeforces
    }

    /// Get a reference to the rate-limit store
    pub fn rate_limiter(&self) -> &Arc<dyn RateLimitStore> {
        &self.inner.rate_limiter
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
