//! Prompt templates for resume enhancement

use log::debug;
use serde::{Deserialize, Serialize};

/// Prompt template for the rewrite request
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub enhance_resume: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            enhance_resume: ENHANCE_RESUME_TEMPLATE.to_string(),
        }
    }
}

/// Parameters for prompt template substitution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptParams {
    pub resume_content: String,
    pub role: String,
}

impl PromptTemplates {
    pub fn render_enhancement(&self, params: &PromptParams) -> String {
        let prompt = self.enhance_resume
            .replace("{role}", &params.role)
            .replace("{resume}", &params.resume_content);

        debug!("Enhancement prompt length: {}", prompt.len());
        prompt
    }
}

const ENHANCE_RESUME_TEMPLATE: &str =
    "Rewrite this resume to make it professional, ATS-friendly, and tailored for a {role} role:\n\n{resume}";

/// Generic advice appended to the fallback text.
pub const FALLBACK_TIPS: &[&str] = &[
    "Use action verbs (Led, Designed, Built).",
    "Add measurable achievements.",
    "Tailor skills to job description.",
];

/// Text returned when the provider cannot produce a rewrite.
pub fn fallback_text(resume_text: &str) -> String {
    let mut text = String::from("Enhanced Resume (Fallback Mode)\n\n");
    text.push_str("The text-generation service is unavailable or the API token is missing/invalid.\n\n");
    text.push_str(resume_text.trim());
    text.push_str("\n\nTips:\n");
    for tip in FALLBACK_TIPS {
        text.push_str("- ");
        text.push_str(tip);
        text.push('\n');
    }
    text
}
