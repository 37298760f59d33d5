//! Resume enhancement through a hosted text-generation model

pub mod enhancer;
pub mod prompts;
