//! Prompt domain
//!
//! Templates for the prompt sent at each stage of a generation run.

mod grade;
mod template;

pub use grade::GradeLevel;
pub use template::PromptTemplate;
