//! CLI interface for the resume analyser

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-analyser")]
#[command(about = "Resume analysis: contact details, skills, checklist score, ATS match and course suggestions")]
#[command(long_about = "Extract contact details and skills from a resume, score its completeness, match it against an optional job description and recommend courses for the detected career track")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyse a resume, optionally against a job description
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (TXT, MD)
        #[arg(short, long, conflicts_with = "job_text")]
        job: Option<PathBuf>,

        /// Job description passed inline
        #[arg(long)]
        job_text: Option<String>,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file (a directory gets a generated file name)
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show text preview and missing keywords
        #[arg(short, long)]
        detailed: bool,

        /// Number of courses to recommend
        #[arg(short = 'n', long)]
        recommendations: Option<usize>,

        /// Seed for course and video sampling
        #[arg(long)]
        seed: Option<u64>,

        /// Rewrite the resume with the hosted text-generation model
        #[arg(long)]
        enhance: bool,

        /// Write the enhanced resume to this PDF (implies --enhance)
        #[arg(long)]
        export_pdf: Option<PathBuf>,

        /// Disable colored console output
        #[arg(long)]
        no_color: bool,
    },

    /// List the skill vocabulary
    Skills,

    /// List course catalogs
    Courses {
        /// Track to show: data-science, web, android, ios, uiux
        #[arg(short, long)]
        track: Option<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        "html" => Ok(crate::config::OutputFormat::Html),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown, html", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
