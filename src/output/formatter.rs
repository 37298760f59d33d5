//! Output formatters for analysis reports

use crate::config::OutputFormat;
use crate::error::{Result, ResumeAnalyserError};
use crate::output::report::{score_label, AnalysisReport};
use askama::Template;
use colored::{Color, Colorize};
use std::collections::BTreeSet;
use std::path::Path;

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
    keyword_limit: usize,
}

/// JSON formatter for structured output
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing reports
pub struct MarkdownFormatter {
    include_metadata: bool,
    keyword_limit: usize,
}

/// HTML formatter with embedded styling
pub struct HtmlFormatter {
    include_styles: bool,
    keyword_limit: usize,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

/// Comma-joined keywords, cut to `limit` entries with a trailing " ...".
pub fn keyword_summary(keywords: &BTreeSet<String>, limit: usize) -> String {
    let shown: Vec<&str> = keywords.iter().take(limit).map(String::as_str).collect();
    let mut summary = shown.join(", ");
    if keywords.len() > limit {
        summary.push_str(" ...");
    }
    summary
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool, keyword_limit: usize) -> Self {
        Self { use_colors, detailed, keyword_limit }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let label = score_label(score);
        let color = match score {
            80..=100 => Color::Green,
            60..=79 => Color::Yellow,
            40..=59 => Color::BrightYellow,
            _ => Color::Red,
        };

        if self.use_colors {
            format!("[{}]", label.color(color).bold())
        } else {
            format!("[{}]", label)
        }
    }

    fn format_check(&self, present: bool) -> String {
        match (present, self.use_colors) {
            (true, true) => "✅".to_string(),
            (false, true) => "❌".to_string(),
            (true, false) => "[x]".to_string(),
            (false, false) => "[ ]".to_string(),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut output = String::new();

        output.push_str(&self.format_header("📄 RESUME ANALYSIS", 1));
        output.push_str(&format!("Resume: {} | Generated: {}\n",
            report.metadata.resume_file,
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        if self.detailed {
            output.push_str(&self.format_header("📑 Extracted Text (preview)", 2));
            output.push_str(&report.text_preview);
            output.push('\n');
        }

        output.push_str(&self.format_header("👤 Basic Info", 2));
        output.push_str(&format!("Email: {}\n", self.colorize(&analysis.contact.email, Color::Cyan)));
        output.push_str(&format!("Phone: {}\n", self.colorize(&analysis.contact.phone, Color::Cyan)));

        if let Some(job_match) = &analysis.job_match {
            output.push_str(&self.format_header("📊 ATS Score", 2));
            output.push_str(&format!("ATS Score: {}/100 {}\n",
                job_match.score,
                self.format_score_badge(job_match.score)
            ));
            if job_match.matched_keywords.is_empty() {
                output.push_str(&self.colorize("No keywords matched with the job description.\n", Color::Yellow));
            } else {
                output.push_str(&format!("Matched Keywords ({}): {}\n",
                    job_match.matched_keywords.len(),
                    self.colorize(&keyword_summary(&job_match.matched_keywords, self.keyword_limit), Color::Green)
                ));
            }
            if self.detailed && !job_match.missing_keywords.is_empty() {
                output.push_str(&format!("Missing Keywords ({}): {}\n",
                    job_match.missing_keywords.len(),
                    self.colorize(&keyword_summary(&job_match.missing_keywords, self.keyword_limit), Color::Yellow)
                ));
            }
        }

        output.push_str(&self.format_header("🧩 Detected Skills", 2));
        if analysis.skills.is_empty() {
            output.push_str("No known skills auto-detected.\n");
        } else {
            output.push_str(&format!("{}\n", analysis.skills.join(", ")));
        }

        output.push_str(&self.format_header("📝 Resume Content Checklist", 2));
        for check in &analysis.checklist.checks {
            output.push_str(&format!("{} {}\n", self.format_check(check.present), check.category));
        }

        output.push_str(&self.format_header("📊 Resume Score", 3));
        output.push_str(&format!("Your Resume Score: {}/100 {}\n",
            analysis.checklist.score,
            self.format_score_badge(analysis.checklist.score)
        ));

        output.push_str(&self.format_header("🎯 Recommended Field & Courses", 2));
        output.push_str(&format!("Suggested track: {}\n",
            self.colorize(analysis.recommendation.track.label(), Color::Cyan)
        ));
        for (i, course) in analysis.recommendation.courses.iter().enumerate() {
            output.push_str(&format!("  {}. {} {}\n",
                i + 1,
                course.name,
                self.colorize(&format!("({})", course.url), Color::BrightBlack)
            ));
        }

        if let Some(enhancement) = &report.enhancement {
            output.push_str(&self.format_header("✨ AI-Enhanced Resume", 2));
            if enhancement.is_degraded() {
                output.push_str(&self.colorize("(fallback text, the generation service was unavailable)\n\n", Color::Yellow));
            }
            output.push_str(enhancement.text());
            output.push('\n');
        }

        if analysis.videos.resume_tips.is_some() || analysis.videos.interview_prep.is_some() {
            output.push_str(&self.format_header("🎥 Helpful Videos", 2));
            if let Some(url) = &analysis.videos.resume_tips {
                output.push_str(&format!("Resume writing tips: {}\n", url));
            }
            if let Some(url) = &analysis.videos.interview_prep {
                output.push_str(&format!("Interview preparation: {}\n", url));
            }
        }

        output.push_str(&format!("\n{} Tip: tailor keywords in your resume to match the job description.\n",
            self.colorize("ℹ️", Color::Blue)
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool, keyword_limit: usize) -> Self {
        Self { include_metadata, keyword_limit }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut content = String::new();

        content.push_str("# Resume Analysis Report\n\n");
        if self.include_metadata {
            content.push_str(&format!("**Resume:** {}  \n", report.metadata.resume_file));
            if let Some(job) = &report.metadata.job_source {
                content.push_str(&format!("**Job description:** {}  \n", job));
            }
            content.push_str(&format!("**Generated:** {}\n\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        content.push_str("## Basic Info\n\n");
        content.push_str(&format!("- **Email:** {}\n", analysis.contact.email));
        content.push_str(&format!("- **Phone:** {}\n\n", analysis.contact.phone));

        if let Some(job_match) = &analysis.job_match {
            content.push_str("## ATS Score\n\n");
            content.push_str(&format!("**{}/100** ({})\n\n", job_match.score, score_label(job_match.score)));
            if job_match.matched_keywords.is_empty() {
                content.push_str("No keywords matched with the job description.\n\n");
            } else {
                content.push_str(&format!("Matched keywords ({}): {}\n\n",
                    job_match.matched_keywords.len(),
                    keyword_summary(&job_match.matched_keywords, self.keyword_limit)
                ));
            }
            if !job_match.missing_keywords.is_empty() {
                content.push_str(&format!("Missing keywords ({}): {}\n\n",
                    job_match.missing_keywords.len(),
                    keyword_summary(&job_match.missing_keywords, self.keyword_limit)
                ));
            }
        }

        content.push_str("## Detected Skills\n\n");
        if analysis.skills.is_empty() {
            content.push_str("_No known skills auto-detected._\n\n");
        } else {
            let tags: Vec<String> = analysis.skills.iter().map(|s| format!("`{}`", s)).collect();
            content.push_str(&format!("{}\n\n", tags.join(" ")));
        }

        content.push_str("## Resume Content Checklist\n\n");
        for check in &analysis.checklist.checks {
            content.push_str(&format!("- [{}] {}\n", if check.present { "x" } else { " " }, check.category));
        }
        content.push_str(&format!("\n**Resume Score:** {}/100\n\n", analysis.checklist.score));

        content.push_str("## Recommended Field & Courses\n\n");
        content.push_str(&format!("**Suggested track:** {}\n\n", analysis.recommendation.track));
        for (i, course) in analysis.recommendation.courses.iter().enumerate() {
            content.push_str(&format!("{}. [{}]({})\n", i + 1, course.name, course.url));
        }
        content.push('\n');

        if let Some(enhancement) = &report.enhancement {
            content.push_str("## AI-Enhanced Resume\n\n");
            if enhancement.is_degraded() {
                content.push_str("> Fallback text: the generation service was unavailable.\n\n");
            }
            content.push_str("```text\n");
            content.push_str(enhancement.text());
            content.push_str("\n```\n\n");
        }

        if let Some(url) = &analysis.videos.resume_tips {
            content.push_str("## Helpful Videos\n\n");
            content.push_str(&format!("- [Resume writing tips]({})\n", url));
            if let Some(url) = &analysis.videos.interview_prep {
                content.push_str(&format!("- [Interview preparation]({})\n", url));
            }
            content.push('\n');
        }

        content.push_str(&format!("---\n_Generated by Resume Analyser v{}_\n", report.metadata.analyser_version));
        Ok(content)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

struct HtmlCourse {
    name: String,
    url: String,
}

struct HtmlCheck {
    label: String,
    present: bool,
}

/// Askama template for HTML output
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Resume Analysis Report</title>
    {% if include_styles %}
    <style>
        body { font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; max-width: 860px; margin: 0 auto; padding: 20px; color: #333; }
        h2 { color: #007acc; border-bottom: 2px solid #e9ecef; padding-bottom: 6px; }
        .badge { padding: 4px 12px; border-radius: 12px; background: #17a2b8; color: white; font-weight: bold; }
        .present { color: #28a745; }
        .absent { color: #dc3545; }
        .skill { display: inline-block; background: #e9ecef; border-radius: 4px; padding: 2px 8px; margin: 2px; }
        pre { background: #f8f9fa; padding: 15px; white-space: pre-wrap; }
        .metadata { font-size: 0.9em; color: #6c757d; }
    </style>
    {% endif %}
</head>
<body>
    <h1>Resume Analysis Report</h1>
    <p class="metadata">{{ resume_file }} | Generated: {{ generated_at }}</p>

    <h2>Basic Info</h2>
    <p><strong>Email:</strong> {{ email }}<br><strong>Phone:</strong> {{ phone }}</p>

    {% if has_job_match %}
    <h2>ATS Score</h2>
    <p><span class="badge">{{ ats_score }}/100</span></p>
    {% if matched_keywords.is_empty() %}
    <p>No keywords matched with the job description.</p>
    {% else %}
    <p>Matched keywords ({{ matched_count }}): {{ matched_keywords }}</p>
    {% endif %}
    {% endif %}

    <h2>Detected Skills</h2>
    {% if skills.is_empty() %}
    <p>No known skills auto-detected.</p>
    {% else %}
    <p>{% for skill in skills %}<span class="skill">{{ skill }}</span>{% endfor %}</p>
    {% endif %}

    <h2>Resume Content Checklist</h2>
    <ul>
    {% for check in checks %}
        {% if check.present %}
        <li class="present">&#10004; {{ check.label }}</li>
        {% else %}
        <li class="absent">&#10008; {{ check.label }}</li>
        {% endif %}
    {% endfor %}
    </ul>
    <p><strong>Resume Score:</strong> <span class="badge">{{ checklist_score }}/100</span></p>

    <h2>Recommended Field &amp; Courses</h2>
    <p><strong>Suggested track:</strong> {{ track }}</p>
    <ol>
    {% for course in courses %}
        <li><a href="{{ course.url }}">{{ course.name }}</a></li>
    {% endfor %}
    </ol>

    {% if has_enhancement %}
    <h2>AI-Enhanced Resume</h2>
    {% if enhancement_degraded %}<p><em>Fallback text: the generation service was unavailable.</em></p>{% endif %}
    <pre>{{ enhancement_text }}</pre>
    {% endif %}

    <p class="metadata">Generated by Resume Analyser v{{ version }}</p>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    resume_file: String,
    generated_at: String,
    email: String,
    phone: String,
    has_job_match: bool,
    ats_score: u8,
    matched_count: usize,
    matched_keywords: String,
    skills: Vec<String>,
    checks: Vec<HtmlCheck>,
    checklist_score: u8,
    track: String,
    courses: Vec<HtmlCourse>,
    has_enhancement: bool,
    enhancement_degraded: bool,
    enhancement_text: String,
    version: String,
}

impl HtmlFormatter {
    pub fn new(include_styles: bool, keyword_limit: usize) -> Self {
        Self { include_styles, keyword_limit }
    }

    fn create_template_data(&self, report: &AnalysisReport) -> HtmlTemplate {
        let analysis = &report.analysis;
        let job_match = analysis.job_match.as_ref();

        HtmlTemplate {
            include_styles: self.include_styles,
            resume_file: report.metadata.resume_file.clone(),
            generated_at: report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            email: analysis.contact.email.clone(),
            phone: analysis.contact.phone.clone(),
            has_job_match: job_match.is_some(),
            ats_score: job_match.map(|m| m.score).unwrap_or(0),
            matched_count: job_match.map(|m| m.matched_keywords.len()).unwrap_or(0),
            matched_keywords: job_match
                .map(|m| keyword_summary(&m.matched_keywords, self.keyword_limit))
                .unwrap_or_default(),
            skills: analysis.skills.clone(),
            checks: analysis.checklist.checks
                .iter()
                .map(|check| HtmlCheck {
                    label: check.category.label().to_string(),
                    present: check.present,
                })
                .collect(),
            checklist_score: analysis.checklist.score,
            track: analysis.recommendation.track.label().to_string(),
            courses: analysis.recommendation.courses
                .iter()
                .map(|course| HtmlCourse {
                    name: course.name.clone(),
                    url: course.url.clone(),
                })
                .collect(),
            has_enhancement: report.enhancement.is_some(),
            enhancement_degraded: report.enhancement.as_ref().is_some_and(|e| e.is_degraded()),
            enhancement_text: report.enhancement.as_ref().map(|e| e.text().to_string()).unwrap_or_default(),
            version: report.metadata.analyser_version.clone(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| ResumeAnalyserError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, 20)
    }

    pub fn with_options(use_colors: bool, detailed: bool, keyword_limit: usize) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed, keyword_limit),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true, keyword_limit),
            html_formatter: HtmlFormatter::new(true, keyword_limit),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };

    format!("{}_analysis{}.{}", base_name, timestamp_suffix, extension)
}
