//! Statistics request DTOs

use serde::Deserialize;
use validator::Validate;

/// Query parameters for the year-in-review endpoint
#[derive(Debug, Deserialize, Validate)]
pub struct StatsQuery {
    /// Review year; defaults to the current UTC year. Codeforces
    /// launched in 2010, so earlier years have no data; future years
    /// are clamped to the current one by the service.
    #[validate(range(min = 2010, max = 9999))]
    pub year: Option<i32>,
}
