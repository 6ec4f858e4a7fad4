//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod generate_question_set;
pub mod generate_stage;

#[cfg(test)]
pub(crate) mod test_support;
