//! Utility functions

pub mod time;
pub mod validation;
