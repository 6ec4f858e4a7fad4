//! Error types for the chat-completion adapter

use super::protocol::ApiErrorEnvelope;
use forge_application::GatewayError;
use thiserror::Error;

/// Result type alias for provider operations
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Longest raw body excerpt kept in an error message
const MAX_BODY_EXCERPT: usize = 300;

/// Errors that can occur when talking to the chat-completion endpoint
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    Decode { error: String, raw: String },

    #[error("Response contained no choices")]
    EmptyChoices,

    #[error("Response message content is null")]
    NullContent,

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ProviderError {
    /// Build a status error, preferring the API's own error message over the raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = ApiErrorEnvelope::message_from(body).unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "empty response body".to_string()
            } else {
                excerpt(trimmed)
            }
        });
        ProviderError::Status { status, message }
    }

    pub fn decode(error: impl ToString, raw: &str) -> Self {
        ProviderError::Decode {
            error: error.to_string(),
            raw: excerpt(raw),
        }
    }
}

fn excerpt(text: &str) -> String {
    if text.len() <= MAX_BODY_EXCERPT {
        return text.to_string();
    }
    let mut end = MAX_BODY_EXCERPT;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

impl From<ProviderError> for GatewayError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Http(e) if e.is_timeout() => GatewayError::Timeout,
            ProviderError::Http(e) => GatewayError::ConnectionError(e.to_string()),
            ProviderError::Status { status, message } => match status {
                401 | 403 => GatewayError::AuthenticationFailed(message),
                429 => GatewayError::RateLimited(message),
                _ => GatewayError::RequestFailed { status, message },
            },
            ProviderError::Decode { error, .. } => GatewayError::MalformedResponse(error),
            ProviderError::EmptyChoices => GatewayError::EmptyResponse,
            ProviderError::NullContent => {
                GatewayError::MalformedResponse("message content is null".to_string())
            }
            ProviderError::InvalidBaseUrl(url) => {
                GatewayError::Other(format!("Invalid base URL: {}", url))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_uses_api_message() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        let err = ProviderError::from_status(401, body);
        assert_eq!(err.to_string(), "HTTP 401: Incorrect API key provided");
        assert_eq!(
            GatewayError::from(err),
            GatewayError::AuthenticationFailed("Incorrect API key provided".to_string())
        );
    }

    #[test]
    fn test_status_falls_back_to_body() {
        let err = ProviderError::from_status(502, "  Bad Gateway  ");
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");

        let err = ProviderError::from_status(500, "");
        assert_eq!(err.to_string(), "HTTP 500: empty response body");
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            GatewayError::from(ProviderError::from_status(429, "slow down")),
            GatewayError::RateLimited(_)
        ));
        assert_eq!(
            GatewayError::from(ProviderError::from_status(404, "no such model")),
            GatewayError::RequestFailed {
                status: 404,
                message: "no such model".to_string()
            }
        );
    }

    #[test]
    fn test_long_body_is_truncated() {
        let body = "x".repeat(1000);
        let ProviderError::Status { message, .. } = ProviderError::from_status(500, &body) else {
            panic!("expected status error");
        };
        assert_eq!(message.len(), MAX_BODY_EXCERPT + 3);
        assert!(message.ends_with("..."));
    }

    #[test]
    fn test_null_content_mapping() {
        assert_eq!(
            GatewayError::from(ProviderError::NullContent),
            GatewayError::MalformedResponse("message content is null".to_string())
        );
    }

    #[test]
    fn test_empty_choices_mapping() {
        assert_eq!(
            GatewayError::from(ProviderError::EmptyChoices),
            GatewayError::EmptyResponse
        );
    }
}
