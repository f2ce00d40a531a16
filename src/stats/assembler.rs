//! Final statistics assembly

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{RatingPoint, SubmissionRecord, UserProfile, UserStats};
use crate::stats::{aggregate_distributions, build_calendar, calculate_streaks, estimate_percentile};
use crate::utils::time::{format_date, month_prefix, now_utc};

/// Run the full derivation pipeline and assemble the result record.
///
/// `year` is the review window and `today` its cutoff; both are explicit
/// so the pipeline is a pure function of its arguments (only the
/// `generated_at` stamp differs between runs on identical input).
pub fn build_user_stats(
    profile: &UserProfile,
    submissions: &[SubmissionRecord],
    year: i32,
    today: NaiveDate,
) -> UserStats {
    // Distributions and the accepted count are restricted to the target
    // year; the calendar applies the same window internally.
    let year_submissions: Vec<&SubmissionRecord> = submissions
        .iter()
        .filter(|s| s.calendar_date().is_some_and(|d| d.year() == year))
        .collect();

    // For a past review year the window closes at Dec 31 of that year,
    // not at today's date.
    let cutoff = NaiveDate::from_ymd_opt(year, 12, 31).map_or(today, |eoy| today.min(eoy));

    let calendar = build_calendar(submissions, year, cutoff);
    let streaks = calculate_streaks(&calendar, today);
    let distribution = aggregate_distributions(year_submissions.iter().copied());

    let total_submissions = calendar.values().sum();
    let most_active_day = peak_entry(&calendar);
    let most_active_month = peak_entry(&monthly_totals(&calendar));
    let rating_progression = rating_progression(&year_submissions);

    UserStats {
        handle: profile.handle.clone(),
        total_submissions,
        accepted_submissions: distribution.accepted,
        universal_rank: estimate_percentile(profile.rating).to_string(),
        longest_streak: streaks.longest,
        current_streak: streaks.current,
        most_active_month,
        most_active_day,
        top_language: distribution.top_language,
        language_distribution: distribution.languages,
        tag_distribution: distribution.tags,
        contribution_data: calendar,
        rating_progression,
        generated_at: now_utc(),
    }
}

/// Sum calendar counts per "YYYY-MM" bucket
fn monthly_totals(calendar: &BTreeMap<String, u32>) -> BTreeMap<String, u32> {
    let mut months = BTreeMap::new();
    for (date, &count) in calendar {
        *months.entry(month_prefix(date).to_string()).or_insert(0) += count;
    }
    months
}

/// Key with the maximum count; the chronologically first one wins ties.
///
/// The scan relies on the map iterating its ISO date keys in ascending
/// order, which pins down the tie-break deterministically.
fn peak_entry(entries: &BTreeMap<String, u32>) -> String {
    let mut peak = String::new();
    let mut peak_count = 0u32;

    for (key, &count) in entries {
        if peak.is_empty() || count > peak_count {
            peak = key.clone();
            peak_count = count;
        }
    }

    peak
}

/// Chronological (date, problem rating) pairs for accepted submissions
fn rating_progression(year_submissions: &[&SubmissionRecord]) -> Vec<RatingPoint> {
    let mut progression: Vec<RatingPoint> = year_submissions
        .iter()
        .filter(|s| s.is_accepted())
        .filter_map(|s| {
            s.calendar_date().map(|date| RatingPoint {
                date: format_date(date),
                rating: s.problem.rating.unwrap_or(0),
            })
        })
        .collect();

    progression.sort_by(|a, b| a.date.cmp(&b.date));
    progression
}
