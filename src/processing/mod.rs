//! Resume analysis core: pattern primitives, extractors, scorers and
//! course recommendation

pub mod patterns;
pub mod contact;
pub mod skills;
pub mod checklist;
pub mod ats_matcher;
pub mod field;
pub mod courses;
pub mod analyzer;
