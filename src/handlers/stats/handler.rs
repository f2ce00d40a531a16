//! Statistics handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use crate::{error::AppResult, models::UserStats, services::StatsService, state::AppState};

use super::request::StatsQuery;

/// Get a user's year-in-review statistics
pub async fn get_user_stats(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    Query(query): Query<StatsQuery>,
) -> AppResult<Json<UserStats>> {
    // Validate request
    query.validate()?;

    let stats = StatsService::year_in_review(state.codeforces(), &handle, query.year).await?;
    Ok(Json(stats))
}
