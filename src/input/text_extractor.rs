//! Text extraction from resume and job description files

use crate::error::{Result, ResumeAnalyserError};
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl PdfExtractor {
    /// Decode the text layer of an in-memory PDF.
    pub fn extract_from_bytes(&self, bytes: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ResumeAnalyserError::PdfExtraction(e.to_string()))
    }
}

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        self.extract_from_bytes(&bytes).map_err(|e| {
            ResumeAnalyserError::PdfExtraction(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path).await?)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(self.markdown_to_text(&markdown_content))
    }
}

impl MarkdownExtractor {
    pub fn markdown_to_text(&self, markdown: &str) -> String {
        let parser = Parser::new(markdown);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        self.html_to_text(&html_output)
    }

    fn html_to_text(&self, html: &str) -> String {
        static TAG: OnceLock<Regex> = OnceLock::new();
        let tag_regex = TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"));

        // Break lines at block ends before the tags are stripped
        let text = html
            .replace("<br>", "\n")
            .replace("<br />", "\n")
            .replace("</p>", "\n\n")
            .replace("</li>", "\n")
            .replace("</h1>", "\n")
            .replace("</h2>", "\n")
            .replace("</h3>", "\n");

        let stripped = tag_regex.replace_all(&text, "");
        let decoded = stripped
            .replace("&nbsp;", " ")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&");

        decoded
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_text_strips_formatting() {
        let text = MarkdownExtractor.markdown_to_text("# Jane Doe\n\n**Skills:** Rust &amp; Go\n\n- Docker\n- AWS");

        assert!(text.contains("Jane Doe"));
        assert!(text.contains("Skills: Rust & Go"));
        assert!(text.contains("Docker\nAWS"));
        assert!(!text.contains("**"));
        assert!(!text.contains('#'));
    }

    #[test]
    fn test_invalid_pdf_bytes_fail() {
        let result = PdfExtractor.extract_from_bytes(b"definitely not a pdf");
        assert!(matches!(result, Err(ResumeAnalyserError::PdfExtraction(_))));
    }
}
