//! Analysis engine combining contact extraction, skill detection, checklist
//! scoring, ATS matching and course recommendation

use crate::config::Config;
use crate::error::Result;
use crate::processing::ats_matcher::{calculate_ats_score, MatchScore};
use crate::processing::checklist::{score_checklist, ChecklistResult};
use crate::processing::contact::{extract_contact, ContactInfo};
use crate::processing::courses::{recommend_for_skills, CourseCatalogs, FieldRecommendation};
use crate::processing::skills::SkillDetector;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Main analysis engine; holds the static configuration data only.
pub struct AnalysisEngine {
    skill_detector: SkillDetector,
    catalogs: CourseCatalogs,
    resume_videos: Vec<String>,
    interview_videos: Vec<String>,
    recommendation_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub contact: ContactInfo,
    pub skills: Vec<String>,
    pub checklist: ChecklistResult,
    /// Present whenever a non-empty job description was supplied.
    pub job_match: Option<MatchScore>,
    pub recommendation: FieldRecommendation,
    pub videos: VideoSuggestions,
    pub text_stats: TextStats,
    pub processing_time_ms: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoSuggestions {
    pub resume_tips: Option<String>,
    pub interview_prep: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextStats {
    pub character_count: usize,
    pub line_count: usize,
}

impl AnalysisEngine {
    pub fn new(config: &Config) -> Result<Self> {
        let skill_detector = SkillDetector::new(config.skills.vocabulary.iter().cloned())?;

        Ok(Self {
            skill_detector,
            catalogs: config.courses.catalogs.clone(),
            resume_videos: config.courses.resume_videos.clone(),
            interview_videos: config.courses.interview_videos.clone(),
            recommendation_count: config.output.recommendation_count,
        })
    }

    pub fn with_recommendation_count(mut self, count: usize) -> Self {
        self.recommendation_count = count;
        self
    }

    pub fn skill_detector(&self) -> &SkillDetector {
        &self.skill_detector
    }

    pub fn catalogs(&self) -> &CourseCatalogs {
        &self.catalogs
    }

    /// Analyse one resume. `rng` drives course and video sampling only.
    pub fn analyze<R: Rng + ?Sized>(
        &self,
        resume_text: &str,
        job_description: Option<&str>,
        rng: &mut R,
    ) -> ResumeAnalysis {
        let start = Instant::now();

        let contact = extract_contact(resume_text);
        let skills = self.skill_detector.detect(resume_text);
        let checklist = score_checklist(resume_text);

        let job_match = job_description
            .filter(|jd| !jd.is_empty())
            .map(|jd| calculate_ats_score(resume_text, jd));

        let recommendation = recommend_for_skills(&skills, &self.catalogs, self.recommendation_count, rng);

        let videos = VideoSuggestions {
            resume_tips: self.resume_videos.choose(rng).cloned(),
            interview_prep: self.interview_videos.choose(rng).cloned(),
        };

        let text_stats = TextStats {
            character_count: resume_text.chars().count(),
            line_count: resume_text.lines().count(),
        };

        debug!(
            "Analysis: {} skills, checklist {}, track {}",
            skills.len(),
            checklist.score,
            recommendation.track
        );

        ResumeAnalysis {
            contact,
            skills,
            checklist,
            job_match,
            recommendation,
            videos,
            text_stats,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

/// First `max_chars` characters of `text`, with " ..." appended when cut.
pub fn text_preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{} ...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::contact::NOT_FOUND;
    use crate::processing::field::Track;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const RESUME: &str = "Jane Doe\njane.doe@example.com | +1 555 123 4567\n\
        Summary: data engineer.\nSkills: Python, SQL, Docker, React\n\
        Projects: streaming ETL\nAwards: Hackathon winner";

    fn engine() -> AnalysisEngine {
        AnalysisEngine::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_full_analysis() {
        let mut rng = StdRng::seed_from_u64(1);

        let analysis = engine().analyze(RESUME, Some("Python and Kafka engineer"), &mut rng);

        assert_eq!(analysis.contact.email, "jane.doe@example.com");
        assert_eq!(analysis.contact.phone, "+1 555 123 4567");
        assert!(analysis.skills.starts_with(&["python".to_string()]));
        assert!(analysis.skills.contains(&"docker".to_string()));
        assert_eq!(analysis.checklist.score, 60);
        assert_eq!(analysis.recommendation.track, Track::DataScience);
        assert_eq!(analysis.recommendation.courses.len(), 5);
        assert!(analysis.videos.resume_tips.is_some());

        let job_match = analysis.job_match.unwrap();
        assert!(job_match.matched_keywords.contains("python"));
        assert!(job_match.missing_keywords.contains("kafka"));
    }

    #[test]
    fn test_without_job_description() {
        let mut rng = StdRng::seed_from_u64(2);

        assert!(engine().analyze(RESUME, None, &mut rng).job_match.is_none());
        assert!(engine().analyze(RESUME, Some(""), &mut rng).job_match.is_none());
    }

    #[test]
    fn test_whitespace_job_description_scores_zero() {
        let mut rng = StdRng::seed_from_u64(6);

        let job_match = engine().analyze("Python dev", Some("   "), &mut rng).job_match.unwrap();

        assert_eq!(job_match.score, 0);
        assert!(job_match.matched_keywords.is_empty());
    }

    #[test]
    fn test_empty_resume() {
        let mut rng = StdRng::seed_from_u64(3);

        let analysis = engine().analyze("", Some("rust"), &mut rng);

        assert_eq!(analysis.contact.email, NOT_FOUND);
        assert_eq!(analysis.contact.phone, NOT_FOUND);
        assert!(analysis.skills.is_empty());
        assert_eq!(analysis.checklist.score, 0);
        assert_eq!(analysis.job_match.unwrap().score, 0);
        assert_eq!(analysis.recommendation.track, Track::GeneralUpskilling);
    }

    #[test]
    fn test_recommendation_count_override() {
        let mut rng = StdRng::seed_from_u64(4);

        let analysis = engine().with_recommendation_count(2).analyze(RESUME, None, &mut rng);

        assert_eq!(analysis.recommendation.courses.len(), 2);
    }

    #[test]
    fn test_text_preview() {
        assert_eq!(text_preview("short", 10), "short");
        assert_eq!(text_preview("abcdef", 3), "abc ...");
        assert_eq!(text_preview("héllo wörld", 4), "héll ...");
    }
}
