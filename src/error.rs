//! Error handling for the resume analyser application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeAnalyserError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("PDF rendering error: {0}")]
    PdfRendering(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Enhancement provider error: {0}")]
    Enhancement(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeAnalyserError>;

impl From<reqwest::Error> for ResumeAnalyserError {
    fn from(err: reqwest::Error) -> Self {
        ResumeAnalyserError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let err: ResumeAnalyserError = io.into();

        assert!(matches!(err, ResumeAnalyserError::Io(_)));
        assert_eq!(err.to_string(), "IO error: missing.txt");
    }

    #[test]
    fn test_serde_error_converts() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ResumeAnalyserError = parse.into();

        assert!(err.to_string().starts_with("Serialization error:"));
    }
}
