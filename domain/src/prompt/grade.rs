//! Target audience embedded in every prompt

use serde::{Deserialize, Serialize};

/// The learners the generated material is written for, phrased as it
/// appears in a prompt (e.g. "3rd graders").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradeLevel(String);

impl GradeLevel {
    pub const DEFAULT: &'static str = "3rd graders";

    /// Try to create a grade level, returning None if blank
    pub fn try_new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Singular form used in the tutoring prompt ("a 3rd grader")
    pub fn singular(&self) -> &str {
        self.0.strip_suffix('s').unwrap_or(&self.0)
    }
}

impl Default for GradeLevel {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl std::fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
