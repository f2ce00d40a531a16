//! Health check handlers
//!
//! Liveness only: the service holds no database or cache connection
//! worth probing, and the upstream Codeforces API is checked per
//! request rather than here.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_reports_service_identity() {
        let Json(body) = tokio_test::block_on(health_check());
        assert_eq!(body.status, "healthy");
        assert_eq!(body.service, "cfwrapped");
        assert!(!body.version.is_empty());
    }
}
