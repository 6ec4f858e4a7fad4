//! Domain layer for question-forge
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Stages
//!
//! A generation run is a fixed chain of three [`Stage`]s, each one a single
//! chat-completion call whose input depends on the previous stage:
//!
//! - **Criteria**: curriculum description → assessment rubric
//! - **Questions**: description + samples + rubric → three questions
//! - **Solutions**: questions → step-by-step explanations
//!
//! ## Failures as data
//!
//! A failed stage does not abort the run. Its [`StageOutput`] is tagged
//! [`StageOutcome::Failed`] and its text reads `Error generating <stage>: <detail>`.
//! That text is handed to the next stage exactly like a successful response.

pub mod config;
pub mod core;
pub mod generation;
pub mod prompt;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{
    credential::ApiCredential,
    curriculum::{CurriculumDescription, SampleQuestions},
    error::DomainError,
    model::Model,
};
pub use generation::{
    entities::{Stage, StageModels, StageSampling},
    value_objects::{GenerationResult, StageOutcome, StageOutput},
};
pub use prompt::{GradeLevel, PromptTemplate};
