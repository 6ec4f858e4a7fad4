//! LLM Gateway port
//!
//! Defines the interface for communicating with a chat-completion service.

use async_trait::async_trait;
use forge_domain::{ApiCredential, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Request failed ({status}): {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Response contained no choices")]
    EmptyResponse,

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// A single-turn completion request: one user message, one sampling setting
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: Model,
    pub prompt: String,
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn new(model: Model, prompt: impl Into<String>, temperature: f32) -> Self {
        Self {
            model,
            prompt: prompt.into(),
            temperature,
        }
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer communicates with the
/// completion service. Implementations (adapters) live in the infrastructure
/// layer. The credential is supplied per call; adapters must not cache it.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send the prompt as a single user message and return the text of the
    /// first choice, untrimmed.
    async fn complete(
        &self,
        request: &CompletionRequest,
        credential: &ApiCredential,
    ) -> Result<String, GatewayError>;
}
