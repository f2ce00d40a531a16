//! Language and tag frequency tallies

use std::collections::BTreeMap;

use crate::models::{Distribution, SubmissionRecord};

/// Tally the year's submissions by language and by problem tag.
///
/// A submission increments its language counter once and every tag
/// attached to its problem once, so tag counts can exceed the
/// submission count. The top language is the label with the strictly
/// highest count; on ties the language encountered first during the
/// scan wins, which is made explicit here by tracking first-seen order
/// instead of relying on map iteration order.
pub fn aggregate_distributions<'a, I>(submissions: I) -> Distribution
where
    I: IntoIterator<Item = &'a SubmissionRecord>,
{
    let mut languages: BTreeMap<String, u32> = BTreeMap::new();
    let mut tags: BTreeMap<String, u32> = BTreeMap::new();
    let mut language_order: Vec<String> = Vec::new();
    let mut accepted = 0u32;

    for submission in submissions {
        let language = &submission.programming_language;
        if !languages.contains_key(language) {
            language_order.push(language.clone());
        }
        *languages.entry(language.clone()).or_insert(0) += 1;

        for tag in &submission.problem.tags {
            *tags.entry(tag.clone()).or_insert(0) += 1;
        }

        if submission.is_accepted() {
            accepted += 1;
        }
    }

    let mut top_language = String::new();
    let mut top_count = 0u32;
    for language in &language_order {
        let count = languages[language];
        if count > top_count {
            top_count = count;
            top_language = language.clone();
        }
    }

    Distribution {
        languages,
        tags,
        accepted,
        top_language,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Problem;

    fn submission(lang: &str, tags: &[&str], verdict: &str) -> SubmissionRecord {
        SubmissionRecord {
            id: 0,
            contest_id: None,
            creation_time_seconds: 1_704_110_400,
            programming_language: lang.to_string(),
            verdict: verdict.to_string(),
            problem: Problem {
                tags: tags.iter().map(|t| t.to_string()).collect(),
                rating: None,
                index: "A".to_string(),
                name: "Any".to_string(),
            },
        }
    }

    #[test]
    fn test_language_and_tag_tallies() {
        let submissions = vec![
            submission("C++", &["dp"], "OK"),
            submission("C++", &["dp", "greedy"], "WRONG_ANSWER"),
            submission("Python", &["dp"], "OK"),
        ];
        let dist = aggregate_distributions(&submissions);

        assert_eq!(dist.languages["C++"], 2);
        assert_eq!(dist.languages["Python"], 1);
        assert_eq!(dist.tags["dp"], 3);
        assert_eq!(dist.tags["greedy"], 1);
        assert_eq!(dist.top_language, "C++");
        assert_eq!(dist.accepted, 2);
    }

    #[test]
    fn test_top_language_tie_goes_to_first_encountered() {
        let submissions = vec![
            submission("Python", &[], "OK"),
            submission("C++", &[], "OK"),
            submission("C++", &[], "OK"),
            submission("Python", &[], "OK"),
        ];
        let dist = aggregate_distributions(&submissions);
        // Both have two submissions; Python appeared first in the scan
        assert_eq!(dist.top_language, "Python");
    }

    #[test]
    fn test_empty_input_yields_empty_distribution() {
        let empty: Vec<SubmissionRecord> = Vec::new();
        let dist = aggregate_distributions(&empty);
        assert!(dist.languages.is_empty());
        assert!(dist.tags.is_empty());
        assert!(dist.top_language.is_empty());
        assert_eq!(dist.accepted, 0);
    }

    #[test]
    fn test_untagged_submission_counts_language_only() {
        let dist = aggregate_distributions(&[submission("Kotlin", &[], "OK")]);
        assert_eq!(dist.languages["Kotlin"], 1);
        assert!(dist.tags.is_empty());
    }
}
