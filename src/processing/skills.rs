//! Skill detection against a fixed vocabulary

use crate::error::{Result, ResumeAnalyserError};
use aho_corasick::AhoCorasick;
use log::debug;

/// Default vocabulary, in detection order.
pub const DEFAULT_SKILLS: &[&str] = &[
    "python", "r", "sql", "numpy", "pandas", "matplotlib", "seaborn", "scikit-learn",
    "machine learning", "deep learning", "tensorflow", "keras", "pytorch", "nlp",
    "data analysis", "data visualization", "statistics",
    "html", "css", "javascript", "typescript", "react", "next.js", "node", "express", "django", "flask",
    "android", "kotlin", "java", "swift", "ios", "flutter", "dart",
    "git", "linux", "docker", "kubernetes", "aws", "azure", "gcp",
    "spark", "hadoop", "tableau", "power bi", "powerbi",
];

/// Case-insensitive substring matcher over a skill vocabulary.
///
/// Every entry is tested independently, so a term contained in another
/// ("java" in "javascript") is reported on its own as well.
pub struct SkillDetector {
    vocabulary: Vec<String>,
    matcher: AhoCorasick,
}

impl SkillDetector {
    pub fn new<I, S>(vocabulary: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        // Matching is case-insensitive, so "React" and "react" are one entry;
        // the first spelling is the one reported.
        let mut entries: Vec<String> = Vec::new();
        let mut patterns: Vec<String> = Vec::new();
        for skill in vocabulary {
            let skill = skill.into();
            let pattern = skill.to_lowercase();
            if !patterns.contains(&pattern) {
                entries.push(skill);
                patterns.push(pattern);
            }
        }

        let matcher = AhoCorasick::new(&patterns)
            .map_err(|e| ResumeAnalyserError::Configuration(format!("Failed to build skill matcher: {}", e)))?;

        Ok(Self {
            vocabulary: entries,
            matcher,
        })
    }

    pub fn with_default_vocabulary() -> Result<Self> {
        Self::new(DEFAULT_SKILLS.iter().copied())
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Skills found in `text`, in vocabulary order.
    pub fn detect(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut hits = vec![false; self.vocabulary.len()];

        for mat in self.matcher.find_overlapping_iter(&lowered) {
            hits[mat.pattern().as_usize()] = true;
        }

        let found: Vec<String> = self
            .vocabulary
            .iter()
            .zip(hits)
            .filter_map(|(skill, hit)| hit.then(|| skill.clone()))
            .collect();

        debug!("Detected {} of {} vocabulary skills", found.len(), self.vocabulary.len());
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_terms_both_match() {
        let detector = SkillDetector::new(["python", "java", "javascript"]).unwrap();

        let skills = detector.detect("I know Java and JavaScript");

        assert_eq!(skills, vec!["java".to_string(), "javascript".to_string()]);
    }

    #[test]
    fn test_output_follows_vocabulary_order() {
        let detector = SkillDetector::new(["docker", "rust", "sql"]).unwrap();

        let skills = detector.detect("SQL first, then Rust, and finally Docker");

        assert_eq!(skills, vec!["docker", "rust", "sql"]);
    }

    #[test]
    fn test_repeated_mentions_are_deduplicated() {
        let detector = SkillDetector::new(["react", "react"]).unwrap();

        assert_eq!(detector.vocabulary().len(), 1);
        assert_eq!(detector.detect("React, react, REACT"), vec!["react"]);
    }

    #[test]
    fn test_case_variants_are_one_skill() {
        let detector = SkillDetector::new(["React", "react", "REACT"]).unwrap();

        assert_eq!(detector.vocabulary().to_vec(), vec!["React".to_string()]);
        assert_eq!(detector.detect("Built UIs in React"), vec!["React"]);
    }

    #[test]
    fn test_multi_word_skills() {
        let detector = SkillDetector::with_default_vocabulary().unwrap();

        let skills = detector.detect("Built dashboards in Power BI using Machine Learning outputs");

        assert!(skills.contains(&"power bi".to_string()));
        assert!(skills.contains(&"machine learning".to_string()));
        assert!(!skills.contains(&"powerbi".to_string()));
    }

    #[test]
    fn test_detection_is_deterministic() {
        let detector = SkillDetector::with_default_vocabulary().unwrap();
        let text = "Python, pandas, Docker and AWS on Linux";

        assert_eq!(detector.detect(text), detector.detect(text));
    }

    #[test]
    fn test_empty_text_detects_nothing() {
        let detector = SkillDetector::new(["python", "sql"]).unwrap();
        assert!(detector.detect("").is_empty());
    }

    #[test]
    fn test_mixed_case_vocabulary() {
        let detector = SkillDetector::new(["Next.js"]).unwrap();
        assert_eq!(detector.detect("shipped with NEXT.JS"), vec!["Next.js"]);
    }
}
