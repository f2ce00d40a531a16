//! User profile model

use serde::{Deserialize, Serialize};

/// Public Codeforces user profile as returned by `user.info`
///
/// The API omits the rating fields entirely for unrated users, so they
/// default to zero, which the rank estimator treats as "unrated".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub handle: String,

    #[serde(default)]
    pub rating: i64,

    #[serde(default)]
    pub max_rating: i64,

    #[serde(default)]
    pub rank: String,

    #[serde(default)]
    pub max_rank: String,
}

impl UserProfile {
    /// Check whether the user has ever been rated
    pub fn is_rated(&self) -> bool {
        self.rating != 0
    }
}
