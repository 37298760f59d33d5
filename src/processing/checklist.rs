//! Resume content checklist and completeness score

use serde::{Deserialize, Serialize};
use std::fmt;

/// Points awarded for each category present.
pub const POINTS_PER_CATEGORY: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChecklistCategory {
    ObjectiveSummary,
    Projects,
    AchievementsAwards,
    HobbiesInterests,
    Declaration,
}

impl ChecklistCategory {
    pub const ALL: [ChecklistCategory; 5] = [
        ChecklistCategory::ObjectiveSummary,
        ChecklistCategory::Projects,
        ChecklistCategory::AchievementsAwards,
        ChecklistCategory::HobbiesInterests,
        ChecklistCategory::Declaration,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ChecklistCategory::ObjectiveSummary => "Objective / Summary",
            ChecklistCategory::Projects => "Projects",
            ChecklistCategory::AchievementsAwards => "Achievements/Awards",
            ChecklistCategory::HobbiesInterests => "Hobbies/Interests",
            ChecklistCategory::Declaration => "Declaration",
        }
    }

    /// Lower-case keywords; any one of them marks the category present.
    pub fn synonyms(&self) -> &'static [&'static str] {
        match self {
            ChecklistCategory::ObjectiveSummary => &["objective", "summary", "about me"],
            ChecklistCategory::Projects => &["project"],
            ChecklistCategory::AchievementsAwards => &["achievement", "award", "honor"],
            ChecklistCategory::HobbiesInterests => &["hobby", "hobbies", "interest", "interests"],
            ChecklistCategory::Declaration => &["declaration"],
        }
    }
}

impl fmt::Display for ChecklistCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCheck {
    pub category: ChecklistCategory,
    pub present: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistResult {
    /// One entry per category, in [`ChecklistCategory::ALL`] order.
    pub checks: Vec<CategoryCheck>,
    pub score: u8,
}

impl ChecklistResult {
    pub fn is_present(&self, category: ChecklistCategory) -> bool {
        self.checks
            .iter()
            .any(|check| check.category == category && check.present)
    }

    pub fn missing(&self) -> Vec<ChecklistCategory> {
        self.checks
            .iter()
            .filter(|check| !check.present)
            .map(|check| check.category)
            .collect()
    }
}

pub fn score_checklist(text: &str) -> ChecklistResult {
    let lowered = text.to_lowercase();

    let checks: Vec<CategoryCheck> = ChecklistCategory::ALL
        .iter()
        .map(|&category| CategoryCheck {
            category,
            present: category.synonyms().iter().any(|kw| lowered.contains(kw)),
        })
        .collect();

    let present = checks.iter().filter(|check| check.present).count() as u8;

    ChecklistResult {
        checks,
        score: present * POINTS_PER_CATEGORY,
    }
}
