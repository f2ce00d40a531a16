//! Rank percentile estimation

use crate::constants::{RANK_PERCENTILE_FLOOR, RANK_PERCENTILES, UNRATED_LABEL};

/// Map a rating to its "top X%" tier label.
///
/// A static lookup against the Codeforces rank thresholds, not a
/// percentile computed from an actual rating distribution. Total over
/// every input: zero (the API's "no rating" default) maps to the
/// unrated label and anything below the lowest threshold falls through
/// to the floor tier.
pub fn estimate_percentile(rating: i64) -> &'static str {
    if rating == 0 {
        return UNRATED_LABEL;
    }

    for &(threshold, label) in RANK_PERCENTILES {
        if rating >= threshold {
            return label;
        }
    }

    RANK_PERCENTILE_FLOOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rating_is_unrated() {
        assert_eq!(estimate_percentile(0), "Unrated");
    }

    #[test]
    fn test_tier_boundaries_are_inclusive_on_the_lower_edge() {
        assert_eq!(estimate_percentile(3000), "0.1");
        assert_eq!(estimate_percentile(2999), "0.3");
        assert_eq!(estimate_percentile(2600), "0.3");
        assert_eq!(estimate_percentile(2400), "1");
        assert_eq!(estimate_percentile(2300), "2");
        assert_eq!(estimate_percentile(2100), "5");
        assert_eq!(estimate_percentile(1900), "10");
        assert_eq!(estimate_percentile(1600), "20");
        assert_eq!(estimate_percentile(1400), "50");
        assert_eq!(estimate_percentile(1200), "70");
        assert_eq!(estimate_percentile(1199), "100");
    }

    #[test]
    fn test_extreme_ratings_still_map() {
        assert_eq!(estimate_percentile(1), "100");
        assert_eq!(estimate_percentile(4000), "0.1");
    }

    #[test]
    fn test_threshold_table_is_strictly_descending() {
        for pair in RANK_PERCENTILES.windows(2) {
            assert!(pair[0].0 > pair[1].0);
        }
    }
}
