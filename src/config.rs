//! Configuration management for the resume analyser

mod defaults;

use crate::error::{Result, ResumeAnalyserError};
use crate::processing::courses::{CourseCatalogs, DEFAULT_RECOMMENDATION_COUNT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub skills: SkillsConfig,
    pub courses: CoursesConfig,
    pub enhancement: EnhancementConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsConfig {
    /// Ordered skill vocabulary; detection output follows this order.
    pub vocabulary: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoursesConfig {
    pub resume_videos: Vec<String>,
    pub interview_videos: Vec<String>,
    pub catalogs: CourseCatalogs,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhancementConfig {
    pub api_url: String,
    pub model: String,
    /// Environment variable holding the API token.
    pub token_env: String,
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    pub recommendation_count: usize,
    pub preview_chars: usize,
    pub matched_keyword_limit: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            vocabulary: defaults::skill_vocabulary(),
        }
    }
}

impl Default for CoursesConfig {
    fn default() -> Self {
        Self {
            resume_videos: defaults::resume_videos(),
            interview_videos: defaults::interview_videos(),
            catalogs: defaults::course_catalogs(),
        }
    }
}

impl Default for EnhancementConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api-inference.huggingface.co/models".to_string(),
            model: "google/flan-t5-large".to_string(),
            token_env: "HF_TOKEN".to_string(),
            max_new_tokens: 500,
            temperature: 0.7,
            timeout_secs: 60,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
            recommendation_count: DEFAULT_RECOMMENDATION_COUNT,
            preview_chars: 1500,
            matched_keyword_limit: 20,
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing default file is created with default values; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ResumeAnalyserError::Configuration(format!(
                        "Config file does not exist: {}",
                        path.display()
                    )));
                }
                Self::load_from(path)
            }
            None => {
                let config_path = Self::config_path();
                if config_path.exists() {
                    Self::load_from(&config_path)
                } else {
                    let config = Self::default();
                    config.save()?;
                    Ok(config)
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| ResumeAnalyserError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ResumeAnalyserError::Configuration(format!("Failed to serialize config: {}", e)))
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-analyser")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        if self.skills.vocabulary.iter().any(|s| s.trim().is_empty()) {
            return Err(ResumeAnalyserError::Configuration(
                "Skill vocabulary contains an empty entry".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.enhancement.temperature) {
            return Err(ResumeAnalyserError::Configuration(format!(
                "enhancement.temperature must be within 0.0..=2.0, got {}",
                self.enhancement.temperature
            )));
        }
        Ok(())
    }
}
