//! Statistics handlers

mod handler;
pub mod request;

pub use handler::*;
pub use request::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Statistics routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/{handle}", get(handler::get_user_stats))
}
