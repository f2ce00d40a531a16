//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod health;
pub mod stats;

use axum::{Router, middleware};

use crate::{middleware::rate_limit_middleware, state::AppState};

/// Create all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest(
            "/stats",
            stats::routes()
                .route_layer(middleware::from_fn_with_state(state, rate_limit_middleware)),
        )
}
