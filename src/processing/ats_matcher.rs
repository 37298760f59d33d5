//! ATS (Applicant Tracking System) keyword matching and scoring
//!
//! The score is plain set overlap: the share of distinct job-description
//! words that also occur in the resume. Frequency and position are ignored.

use crate::processing::patterns::word_set;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    /// Percentage in `0..=100`, rounded down.
    pub score: u8,
    pub matched_keywords: BTreeSet<String>,
    /// Job words with no counterpart in the resume.
    pub missing_keywords: BTreeSet<String>,
}

impl MatchScore {
    pub fn coverage(&self) -> f32 {
        self.score as f32 / 100.0
    }
}

/// Score `resume_text` against `job_description`.
///
/// An empty (or word-less) job description scores 0.
pub fn calculate_ats_score(resume_text: &str, job_description: &str) -> MatchScore {
    let job_keywords = word_set(job_description);
    let resume_keywords = word_set(resume_text);

    let (matched_keywords, missing_keywords): (BTreeSet<String>, BTreeSet<String>) = job_keywords
        .iter()
        .cloned()
        .partition(|kw| resume_keywords.contains(kw));

    let score = if job_keywords.is_empty() {
        0
    } else {
        (matched_keywords.len() * 100 / job_keywords.len()) as u8
    };

    MatchScore {
        score,
        matched_keywords,
        missing_keywords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_of_job_keywords_matched() {
        let result = calculate_ats_score("I use Python daily", "python sql python");

        assert_eq!(result.score, 50);
        assert_eq!(result.matched_keywords, BTreeSet::from(["python".to_string()]));
        assert_eq!(result.missing_keywords, BTreeSet::from(["sql".to_string()]));
    }

    #[test]
    fn test_empty_job_description_scores_zero() {
        let result = calculate_ats_score("Python, SQL, Docker", "");

        assert_eq!(result.score, 0);
        assert!(result.matched_keywords.is_empty());
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn test_punctuation_only_job_description() {
        let result = calculate_ats_score("anything", "!!! --- ???");
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_score_rounds_down() {
        // 1 of 3 distinct job words
        let result = calculate_ats_score("rust", "rust go zig");
        assert_eq!(result.score, 33);

        // 2 of 3
        let result = calculate_ats_score("rust and go", "rust go zig");
        assert_eq!(result.score, 66);
    }

    #[test]
    fn test_frequency_does_not_matter() {
        let once = calculate_ats_score("kafka", "kafka streaming");
        let many = calculate_ats_score("kafka kafka kafka kafka", "kafka streaming");

        assert_eq!(once.score, many.score);
    }

    #[test]
    fn test_full_match_is_hundred() {
        let result = calculate_ats_score("Senior Rust engineer", "rust ENGINEER");
        assert_eq!(result.score, 100);
        assert!((result.coverage() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let resume = "Backend developer with Go and PostgreSQL";
        let job = "Go developer, PostgreSQL, Kubernetes";

        assert_eq!(calculate_ats_score(resume, job), calculate_ats_score(resume, job));
    }
}
