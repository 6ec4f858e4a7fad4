//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("TEKS description is required!")]
    MissingDescription,

    #[error("API Key is required!")]
    MissingCredential,

    #[error("Invalid model: {0}")]
    InvalidModel(String),
}
