//! Provider configuration from TOML (`[provider]` section)

use crate::config::validation::ConfigIssue;
use crate::openai::gateway::DEFAULT_BASE_URL;
use forge_domain::ApiCredential;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Chat-completion provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Base URL of an OpenAI-compatible API.
    pub base_url: String,
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key. Prefer the env var.
    pub api_key: Option<String>,
    /// Client-side request timeout; unset waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            timeout_secs: None,
        }
    }
}

impl FileProviderConfig {
    /// Resolve the credential from the configured env var, then the file.
    pub fn resolve_api_key(&self) -> Option<ApiCredential> {
        self.api_key_from_env()
            .or_else(|| self.api_key.as_deref().and_then(ApiCredential::try_new))
    }

    fn api_key_from_env(&self) -> Option<ApiCredential> {
        if self.api_key_env.trim().is_empty() {
            return None;
        }
        std::env::var(&self.api_key_env)
            .ok()
            .and_then(ApiCredential::try_new)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let base = self.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            issues.push(ConfigIssue::error(
                "provider.base_url",
                format!("'{}' is not an http(s) URL", self.base_url),
            ));
        }

        if self.timeout_secs == Some(0) {
            issues.push(ConfigIssue::error(
                "provider.timeout_secs",
                "timeout_secs cannot be 0",
            ));
        }

        if self.api_key.is_some() {
            issues.push(ConfigIssue::warning(
                "provider.api_key",
                format!(
                    "API key stored in a config file; prefer the {} environment variable",
                    self.api_key_env
                ),
            ));
        }

        issues
    }
}
