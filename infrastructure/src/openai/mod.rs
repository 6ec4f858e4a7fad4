//! OpenAI-compatible chat-completion adapter
//!
//! Implements LlmGateway over `POST /v1/chat/completions`.

pub mod error;
pub mod gateway;
pub mod protocol;
