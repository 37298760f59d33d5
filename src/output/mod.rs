//! Report formatting and PDF export

pub mod formatter;
pub mod pdf;
pub mod report;
