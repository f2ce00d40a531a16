//! Rate limiting middleware
//!
//! Bounds request frequency per client IP through an injectable store:
//! a process-local sliding window by default, or Redis when the service
//! runs as multiple instances behind one limit.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use axum::{
    body::Body,
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use redis::{AsyncCommands, aio::ConnectionManager};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Sliding-window request counter keyed by caller identity
#[async_trait]
pub trait RateLimitStore: Send + Sync {
    /// Record a hit for `key`; returns `false` once the caller has
    /// exhausted `limit` requests within `window`.
    async fn hit(&self, key: &str, limit: u32, window: Duration) -> AppResult<bool>;
}

/// In-process store keeping per-key request timestamps, pruned on every hit
#[derive(Debug, Default)]
pub struct MemoryStore {
    requests: Mutex<HashMap<String, Vec<Instant>>>,
}

#[async_trait]
impl RateLimitStore for MemoryStore {
    async fn hit(&self, key: &str, limit: u32, window: Duration) -> AppResult<bool> {
        let now = Instant::now();
        let mut requests = self
            .requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let timestamps = requests.entry(key.to_string()).or_default();
        timestamps.retain(|t| now.duration_since(*t) < window);

        if timestamps.len() >= limit as usize {
            return Ok(false);
        }

        timestamps.push(now);
        Ok(true)
    }
}

/// Redis-backed store: INCR per key with an expiry set on the first hit
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl RateLimitStore for RedisStore {
    async fn hit(&self, key: &str, limit: u32, window: Duration) -> AppResult<bool> {
        let mut conn = self.conn.clone();

        let count: i64 = conn.incr(key, 1).await?;
        if count == 1 {
            let _: () = conn.expire(key, window.as_secs() as i64).await?;
        }

        Ok(count <= i64::from(limit))
    }
}

/// Rate limit middleware
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let ip = addr.ip().to_string();
    let key = format!("rate_limit:{}", ip);

    let limit = state.config().rate_limit.max_requests;
    let window = Duration::from_secs(state.config().rate_limit.window_seconds);

    match state.rate_limiter().hit(&key, limit, window).await {
        Ok(true) => Ok(next.run(request).await),
        Ok(false) => Err(AppError::TooManyRequests),
        Err(e) => {
            // A broken store must not take the whole API down; let the
            // request through and surface the fault in the logs.
            tracing::warn!("Rate limit store error, failing open: {}", e);
            Ok(next.run(request).await)
        }
    }
}
