//! Statistics derivation core
//!
//! Pure, single-pass transforms that turn a fetched submission history into
//! the year-in-review aggregates. Every function here is total over
//! well-typed input: there is no failure path, only zero-valued results.

pub mod assembler;
pub mod contribution;
pub mod distribution;
pub mod rank;
pub mod streak;

pub use assembler::build_user_stats;
pub use contribution::build_calendar;
pub use distribution::aggregate_distributions;
pub use rank::estimate_percentile;
pub use streak::calculate_streaks;
