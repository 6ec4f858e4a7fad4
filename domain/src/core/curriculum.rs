//! Curriculum input value objects

use serde::{Deserialize, Serialize};

/// Placeholder embedded in the questions prompt when no samples were given
pub const NO_SAMPLES_PLACEHOLDER: &str = "None provided";

/// A curriculum standard to generate questions for (Value Object)
///
/// Typically the text of a TEKS student expectation, e.g.
/// "Solve one-step addition problems within 100". Never blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurriculumDescription {
    content: String,
}

impl CurriculumDescription {
    /// Try to create a description, returning None if blank
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the description text as supplied by the user
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for CurriculumDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

/// Optional example questions that steer the style of generated items
///
/// Blank input is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleQuestions {
    content: Option<String>,
}

impl SampleQuestions {
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        if content.trim().is_empty() {
            Self::none()
        } else {
            Self {
                content: Some(content),
            }
        }
    }

    pub fn none() -> Self {
        Self { content: None }
    }

    pub fn is_provided(&self) -> bool {
        self.content.is_some()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Text to embed in a prompt: the samples, or [`NO_SAMPLES_PLACEHOLDER`]
    pub fn prompt_text(&self) -> &str {
        self.content.as_deref().unwrap_or(NO_SAMPLES_PLACEHOLDER)
    }
}

impl From<Option<String>> for SampleQuestions {
    fn from(value: Option<String>) -> Self {
        value.map(Self::new).unwrap_or_default()
    }
}
