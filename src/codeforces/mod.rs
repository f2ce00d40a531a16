//! Codeforces REST API client
//!
//! Thin upstream collaborator: fetches a user's public profile and
//! submission history. All statistics derivation happens downstream in
//! [`crate::stats`]; nothing here is cached or mutated.

mod client;
mod response;

pub use client::CodeforcesClient;
pub use response::ApiEnvelope;
