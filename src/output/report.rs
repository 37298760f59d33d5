//! Report structure wrapping one analysis run

use crate::llm::enhancer::EnhancementOutcome;
use crate::processing::analyzer::ResumeAnalysis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metadata: ReportMetadata,
    /// Truncated view of the extracted resume text.
    pub text_preview: String,
    pub analysis: ResumeAnalysis,
    pub enhancement: Option<EnhancementOutcome>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub analyser_version: String,
    pub resume_file: String,
    /// File name, or `"inline"` when the description was passed as text.
    pub job_source: Option<String>,
}

impl ReportMetadata {
    pub fn new(resume_file: impl Into<String>, job_source: Option<String>) -> Self {
        Self {
            generated_at: Utc::now(),
            analyser_version: env!("CARGO_PKG_VERSION").to_string(),
            resume_file: resume_file.into(),
            job_source,
        }
    }
}

impl AnalysisReport {
    pub fn new(metadata: ReportMetadata, text_preview: String, analysis: ResumeAnalysis) -> Self {
        Self {
            metadata,
            text_preview,
            analysis,
            enhancement: None,
        }
    }

    pub fn with_enhancement(mut self, outcome: EnhancementOutcome) -> Self {
        self.enhancement = Some(outcome);
        self
    }
}

/// Short label for a 0-100 score.
pub fn score_label(score: u8) -> &'static str {
    match score {
        80..=100 => "EXCELLENT",
        60..=79 => "GOOD",
        40..=59 => "FAIR",
        _ => "NEEDS WORK",
    }
}
