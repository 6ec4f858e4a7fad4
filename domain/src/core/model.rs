//! Model value object representing a chat-completion model

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Chat-completion models known to question-forge (Value Object)
///
/// Unknown identifiers are kept verbatim as [`Model::Custom`], so any model
/// served by an OpenAI-compatible endpoint can be configured.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gpt4,
    Gpt4o,
    Gpt4oMini,
    Gpt41,
    O1Mini,
    O3Mini,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier sent to the API
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gpt4 => "gpt-4",
            Model::Gpt4o => "gpt-4o",
            Model::Gpt4oMini => "gpt-4o-mini",
            Model::Gpt41 => "gpt-4.1",
            Model::O1Mini => "o1-mini",
            Model::O3Mini => "o3-mini",
            Model::Custom(s) => s,
        }
    }

    /// Parse a user-supplied model name, rejecting blank input
    pub fn try_from_name(name: &str) -> Result<Model, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidModel(
                "model name cannot be empty".to_string(),
            ));
        }
        Ok(Model::from(name))
    }

    /// Default model for the criteria stage
    pub fn default_criteria() -> Model {
        Model::Gpt4
    }

    /// Default model for the questions and solutions stages
    pub fn default_generation() -> Model {
        Model::O1Mini
    }
}

impl Default for Model {
    /// Returns the default model (gpt-4)
    fn default() -> Self {
        Model::Gpt4
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gpt-4" => Model::Gpt4,
            "gpt-4o" => Model::Gpt4o,
            "gpt-4o-mini" => Model::Gpt4oMini,
            "gpt-4.1" => Model::Gpt41,
            "o1-mini" => Model::O1Mini,
            "o3-mini" => Model::O3Mini,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        s.parse().unwrap_or_else(|never| match never {})
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}
