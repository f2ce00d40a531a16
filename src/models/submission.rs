//! Submission model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::ACCEPTED_VERDICT;
use crate::utils::time;

/// A single submission as returned by the Codeforces `user.status` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub id: i64,

    #[serde(default)]
    pub contest_id: Option<i64>,

    /// Submission time as Unix epoch seconds
    pub creation_time_seconds: i64,

    pub programming_language: String,

    /// Verdict string; absent while the submission is still being judged
    #[serde(default)]
    pub verdict: String,

    pub problem: Problem,
}

/// Problem metadata attached to a submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    #[serde(default)]
    pub tags: Vec<String>,

    /// Difficulty rating; absent for unrated problems
    #[serde(default)]
    pub rating: Option<i64>,

    #[serde(default)]
    pub index: String,

    #[serde(default)]
    pub name: String,
}

impl SubmissionRecord {
    /// Check if this submission was accepted
    pub fn is_accepted(&self) -> bool {
        self.verdict == ACCEPTED_VERDICT
    }

    /// Calendar date of the submission, truncated to day precision.
    ///
    /// Epoch seconds are interpreted at zero offset, matching how the
    /// upstream API encodes them; no timezone conversion is applied.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        time::epoch_to_date(self.creation_time_seconds)
    }
}
