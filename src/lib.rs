//! cfwrapped - Codeforces Year in Review
//!
//! This library provides the core functionality for cfwrapped, a service
//! that turns a Codeforces user's public submission history into a
//! wrapped-style year-in-review summary.
//!
//! # Features
//!
//! - Contribution calendar (date -> submission count, gap-free)
//! - Current and longest submission streaks
//! - Language and problem-tag distributions
//! - Rank percentile tier from the Codeforces rating thresholds
//! - Per-IP rate limiting with an in-memory or Redis-backed store
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Orchestration of upstream fetches and derivation
//! - **Stats**: Pure statistics derivation pipeline
//! - **Codeforces**: Upstream REST API client
//! - **Models**: Domain models and DTOs

pub mod codeforces;
pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod stats;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
