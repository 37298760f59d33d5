//! Input processing module
//! Handles file detection and text extraction

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use manager::InputManager;
