//! Resume analyser library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod llm;
pub mod output;

pub use error::{Result, ResumeAnalyserError};
pub use config::Config;
pub use processing::analyzer::{AnalysisEngine, ResumeAnalysis};
