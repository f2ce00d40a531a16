//! Statistics service

use crate::codeforces::CodeforcesClient;
use crate::error::{AppError, AppResult};
use crate::models::UserStats;
use crate::stats::build_user_stats;
use crate::utils::{time, validation};

/// Statistics service for business logic
pub struct StatsService;

impl StatsService {
    /// Fetch a user's profile and submission history and derive the
    /// year-in-review statistics.
    ///
    /// `year` defaults to the current UTC year. Profile and submissions
    /// are fetched concurrently, the way the upstream API is meant to
    /// be used; nothing is cached between requests.
    pub async fn year_in_review(
        client: &CodeforcesClient,
        handle: &str,
        year: Option<i32>,
    ) -> AppResult<UserStats> {
        validation::validate_handle(handle)
            .map_err(|msg| AppError::InvalidInput(msg.to_string()))?;

        let year = resolve_year(year, time::current_year());

        let (profile, submissions) =
            tokio::try_join!(client.user_info(handle), client.user_status(handle))?;

        tracing::info!(
            handle = %profile.handle,
            rated = profile.is_rated(),
            submissions = submissions.len(),
            year = year,
            "Deriving year-in-review statistics"
        );

        Ok(build_user_stats(
            &profile,
            &submissions,
            year,
            time::today_utc(),
        ))
    }
}

/// Pick the review year: default to the current year, and clamp requests
/// for a future year down to it rather than returning an empty calendar
fn resolve_year(requested: Option<i32>, current: i32) -> i32 {
    requested.unwrap_or(current).min(current)
}
