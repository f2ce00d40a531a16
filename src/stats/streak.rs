//! Streak computation over the contribution calendar

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::StreakSummary;
use crate::utils::time::format_date;

/// Scan the calendar in date order and compute streak lengths.
///
/// A streak is a run of consecutive days with at least one submission.
/// `longest` is the maximum run anywhere in the calendar; `current` is
/// the length of the run ending on `today`, or zero when today is
/// inactive or outside the calendar. The two are independent: a longest
/// streak that ended in March does not constrain the current one.
pub fn calculate_streaks(calendar: &BTreeMap<String, u32>, today: NaiveDate) -> StreakSummary {
    let today_key = format_date(today);

    let mut summary = StreakSummary::default();
    let mut running = 0u32;

    // BTreeMap iterates ISO date keys in chronological order
    for (date, &count) in calendar {
        if count > 0 {
            running += 1;
            summary.longest = summary.longest.max(running);
        } else {
            running = 0;
        }

        if *date == today_key {
            summary.current = running;
        }
    }

    summary
}
