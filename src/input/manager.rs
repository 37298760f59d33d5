//! Input manager routing files to the matching extractor

use crate::error::{Result, ResumeAnalyserError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::info;
use std::path::Path;

#[derive(Debug, Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ResumeAnalyserError::InvalidInput(
                format!("File does not exist: {}", path.display())
            ));
        }

        let text = match self.detect_file_type(path)? {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            },
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            },
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            },
            FileType::Unknown => {
                return Err(ResumeAnalyserError::UnsupportedFormat(
                    format!("Unsupported file type for: {}", path.display())
                ));
            }
        };

        Ok(text)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| ResumeAnalyserError::InvalidInput(
                format!("File has no extension: {}", path.display())
            ))?;

        Ok(FileType::from_extension(extension))
    }
}
