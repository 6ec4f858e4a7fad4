//! Wire types for the chat-completion endpoint.
//!
//! Only the fields question-forge reads or writes are modeled; everything
//! else in a response is ignored.

use serde::{Deserialize, Serialize};

/// Chat message role. Every request is a single user turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

/// Chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Request body
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
}

impl ChatCompletionRequest {
    /// A single-turn request carrying `prompt` as the only user message.
    pub fn single_turn(model: impl Into<String>, prompt: impl Into<String>, temperature: f32) -> Self {
        Self {
            model: model.into(),
            messages: vec![Message::user(prompt)],
            temperature,
        }
    }
}

/// Response body
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    /// `null` for refusals or tool-only replies
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Message of the first choice, if any.
    pub fn first_message(&self) -> Option<&ChoiceMessage> {
        self.choices.first().map(|c| &c.message)
    }
}

/// Error envelope returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

impl ApiErrorEnvelope {
    /// Best-effort extraction of the human-readable message from an error body.
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorEnvelope>(body)
            .ok()
            .map(|e| e.error.message)
    }
}
