//! Year-in-review statistics models

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One point of the accepted-submission rating progression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingPoint {
    /// ISO-8601 calendar date of the accepted submission
    pub date: String,
    /// Difficulty rating of the solved problem (0 when the problem is unrated)
    pub rating: i64,
}

/// Current and longest consecutive-active-day runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Streak ending on the current date; zero when today is inactive
    /// or outside the calendar window
    pub current: u32,
    /// Longest run of consecutive active days in the calendar
    pub longest: u32,
}

/// Language and tag frequency tables for one year of submissions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    /// Submission count per programming language
    pub languages: BTreeMap<String, u32>,
    /// Submission count per problem tag (one submission may hit several tags)
    pub tags: BTreeMap<String, u32>,
    /// Number of accepted submissions
    pub accepted: u32,
    /// Language with the strictly highest count, first encountered wins ties;
    /// empty when there are no submissions
    pub top_language: String,
}

/// Complete year-in-review statistics for one user
///
/// Fully self-contained and JSON-serializable: scalars, string-keyed maps
/// of scalars, and lists of simple records only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStats {
    pub handle: String,

    /// Sum of all contribution calendar counts for the year
    pub total_submissions: u32,

    pub accepted_submissions: u32,

    /// "Top X%" tier label derived from the user's rating
    pub universal_rank: String,

    pub longest_streak: u32,

    pub current_streak: u32,

    /// "YYYY-MM" of the month with the most submissions
    pub most_active_month: String,

    /// "YYYY-MM-DD" of the day with the most submissions
    pub most_active_day: String,

    pub top_language: String,

    pub language_distribution: BTreeMap<String, u32>,

    pub tag_distribution: BTreeMap<String, u32>,

    /// Date to submission count, gap-free from Jan 1 through the cutoff date
    pub contribution_data: BTreeMap<String, u32>,

    /// Chronological (date, problem rating) pairs for accepted submissions
    pub rating_progression: Vec<RatingPoint>,

    pub generated_at: DateTime<Utc>,
}
