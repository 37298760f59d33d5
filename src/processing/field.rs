//! Career track classification from detected skills

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Track {
    DataScience,
    WebDevelopment,
    AndroidDevelopment,
    IosDevelopment,
    UiUxDesign,
    /// No rule matched.
    GeneralUpskilling,
}

impl Track {
    pub fn label(&self) -> &'static str {
        match self {
            Track::DataScience => "Data Science / ML",
            Track::WebDevelopment => "Web Development",
            Track::AndroidDevelopment => "Android Development",
            Track::IosDevelopment => "iOS Development",
            Track::UiUxDesign => "UI/UX / Design",
            Track::GeneralUpskilling => "General Upskilling",
        }
    }

    /// Parse a track from a CLI-friendly name such as `web` or `data-science`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "ds" | "ml" | "data-science" | "data_science" => Some(Track::DataScience),
            "web" | "web-development" => Some(Track::WebDevelopment),
            "android" | "android-development" => Some(Track::AndroidDevelopment),
            "ios" | "ios-development" => Some(Track::IosDevelopment),
            "uiux" | "ui-ux" | "design" => Some(Track::UiUxDesign),
            "general" | "general-upskilling" => Some(Track::GeneralUpskilling),
            _ => None,
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub struct TrackRule {
    pub track: Track,
    pub triggers: &'static [&'static str],
}

/// Evaluated top to bottom; the first rule sharing a skill wins.
pub const TRACK_RULES: &[TrackRule] = &[
    TrackRule {
        track: Track::DataScience,
        triggers: &[
            "tensorflow", "keras", "pytorch", "machine learning", "deep learning",
            "scikit-learn", "python", "pandas",
        ],
    },
    TrackRule {
        track: Track::WebDevelopment,
        triggers: &[
            "react", "next.js", "javascript", "typescript", "node", "django", "flask",
            "html", "css",
        ],
    },
    TrackRule {
        track: Track::AndroidDevelopment,
        triggers: &["android", "kotlin", "java", "flutter", "dart"],
    },
    TrackRule {
        track: Track::IosDevelopment,
        triggers: &["swift", "ios"],
    },
    TrackRule {
        track: Track::UiUxDesign,
        triggers: &["figma", "ui", "ux", "adobe xd", "power bi", "tableau"],
    },
];

pub fn classify_track(skills: &[String]) -> Track {
    let skills: HashSet<&str> = skills.iter().map(String::as_str).collect();

    TRACK_RULES
        .iter()
        .find(|rule| rule.triggers.iter().any(|t| skills.contains(t)))
        .map(|rule| rule.track)
        .unwrap_or(Track::GeneralUpskilling)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_data_science_wins_over_web() {
        assert_eq!(classify_track(&skills(&["react", "python"])), Track::DataScience);
        assert_eq!(Track::DataScience.label(), "Data Science / ML");
    }

    #[test]
    fn test_each_rule() {
        assert_eq!(classify_track(&skills(&["css"])), Track::WebDevelopment);
        assert_eq!(classify_track(&skills(&["kotlin"])), Track::AndroidDevelopment);
        assert_eq!(classify_track(&skills(&["swift"])), Track::IosDevelopment);
        assert_eq!(classify_track(&skills(&["tableau"])), Track::UiUxDesign);
    }

    #[test]
    fn test_web_wins_over_android() {
        // "java" and "javascript" are both detected from "JavaScript"
        assert_eq!(
            classify_track(&skills(&["javascript", "java"])),
            Track::WebDevelopment
        );
    }

    #[test]
    fn test_no_match_is_general() {
        assert_eq!(classify_track(&skills(&["docker", "git"])), Track::GeneralUpskilling);
        assert_eq!(classify_track(&[]), Track::GeneralUpskilling);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Track::from_name("Web"), Some(Track::WebDevelopment));
        assert_eq!(Track::from_name("data-science"), Some(Track::DataScience));
        assert_eq!(Track::from_name("cobol"), None);
    }
}
