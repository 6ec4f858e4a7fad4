//! Chat-completion LLM Gateway implementation

use super::error::{ProviderError, Result};
use super::protocol::{ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;
use forge_application::{CompletionRequest, GatewayError, LlmGateway};
use forge_domain::ApiCredential;
use std::time::Duration;
use tracing::{debug, info};

/// Default service root
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

const COMPLETIONS_PATH: &str = "/chat/completions";

/// LLM Gateway for OpenAI-compatible `chat/completions` endpoints.
///
/// Holds no credential; every call is authorized with the key it is given.
pub struct OpenAiChatGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl OpenAiChatGateway {
    /// Create a gateway for `base_url`.
    ///
    /// `base_url` may be the service root (`https://api.openai.com`) or
    /// already include the `/v1` prefix. With `timeout` unset, requests wait
    /// as long as the server takes.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let endpoint = Self::endpoint_for(base_url)?;

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("question-forge/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        info!("OpenAiChatGateway initialized for {}", endpoint);

        Ok(Self { client, endpoint })
    }

    /// Full URL requests are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn endpoint_for(base_url: &str) -> Result<String> {
        let base = base_url.trim().trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ProviderError::InvalidBaseUrl(base_url.to_string()));
        }
        if base.ends_with("/v1") {
            Ok(format!("{}{}", base, COMPLETIONS_PATH))
        } else {
            Ok(format!("{}/v1{}", base, COMPLETIONS_PATH))
        }
    }

    async fn send(
        &self,
        request: &ChatCompletionRequest,
        credential: &ApiCredential,
    ) -> Result<String> {
        debug!(
            "POST {} model={} temperature={} prompt_bytes={}",
            self.endpoint,
            request.model,
            request.temperature,
            request.messages.iter().map(|m| m.content.len()).sum::<usize>()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(credential.expose())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ProviderError::from_status(status.as_u16(), &body));
        }

        let parsed: ChatCompletionResponse =
            serde_json::from_str(&body).map_err(|e| ProviderError::decode(e, &body))?;

        let message = parsed.first_message().ok_or(ProviderError::EmptyChoices)?;
        message.content.clone().ok_or(ProviderError::NullContent)
    }
}

#[async_trait]
impl LlmGateway for OpenAiChatGateway {
    async fn complete(
        &self,
        request: &CompletionRequest,
        credential: &ApiCredential,
    ) -> std::result::Result<String, GatewayError> {
        let body = ChatCompletionRequest::single_turn(
            request.model.as_str(),
            request.prompt.as_str(),
            request.temperature,
        );
        self.send(&body, credential).await.map_err(GatewayError::from)
    }
}
