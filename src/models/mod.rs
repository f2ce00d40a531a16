//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod stats;
pub mod submission;
pub mod user;

pub use stats::*;
pub use submission::*;
pub use user::*;
