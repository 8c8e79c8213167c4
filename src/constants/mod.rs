pub mod diagnostic_questions;
pub mod prompts;
