//! Time utilities

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::constants::DATE_FORMAT;

/// Get current UTC time
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Current UTC calendar date
pub fn today_utc() -> NaiveDate {
    now_utc().date_naive()
}

/// Current UTC year
pub fn current_year() -> i32 {
    today_utc().year()
}

/// Convert Unix epoch seconds to a calendar date at zero offset.
///
/// Returns `None` for timestamps outside chrono's representable range.
pub fn epoch_to_date(epoch_seconds: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(epoch_seconds, 0).map(|dt| dt.date_naive())
}

/// Format a date as an ISO-8601 "YYYY-MM-DD" string
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// "YYYY-MM" prefix of an ISO date string
pub fn month_prefix(date_key: &str) -> &str {
    &date_key[..crate::constants::MONTH_PREFIX_LEN.min(date_key.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_to_date() {
        // 2024-06-15 13:45:00 UTC
        assert_eq!(
            epoch_to_date(1_718_459_100),
            NaiveDate::from_ymd_opt(2024, 6, 15)
        );
        // Day boundary: 2024-01-01 00:00:00 UTC
        assert_eq!(
            epoch_to_date(1_704_067_200),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
        // One second earlier is still 2023-12-31
        assert_eq!(
            epoch_to_date(1_704_067_199),
            NaiveDate::from_ymd_opt(2023, 12, 31)
        );
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_date(date), "2024-03-07");
    }

    #[test]
    fn test_month_prefix() {
        assert_eq!(month_prefix("2024-03-07"), "2024-03");
        assert_eq!(month_prefix("2024-12-31"), "2024-12");
    }
}
