//! Infrastructure layer for question-forge
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod openai;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileModelsConfig, FileOutputConfig, FilePromptConfig,
    FileProviderConfig, FileSamplingConfig, Severity,
};
pub use logging::JsonlConversationLogger;
pub use openai::{
    error::{ProviderError, Result},
    gateway::OpenAiChatGateway,
};
