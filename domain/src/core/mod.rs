//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] - chat-completion model identifiers
//! - [`curriculum::CurriculumDescription`] - the validated standard to generate for
//! - [`credential::ApiCredential`] - the per-run API key, passed explicitly
//! - [`error::DomainError`] - domain-level errors

pub mod credential;
pub mod curriculum;
pub mod error;
pub mod model;
