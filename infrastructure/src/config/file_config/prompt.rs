//! Prompt settings from TOML (`[prompt]` section)

use crate::config::validation::ConfigIssue;
use forge_domain::GradeLevel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePromptConfig {
    /// Audience phrase used in every prompt, e.g. "3rd graders"
    pub grade_level: String,
}

impl Default for FilePromptConfig {
    fn default() -> Self {
        Self {
            grade_level: GradeLevel::DEFAULT.to_string(),
        }
    }
}

impl FilePromptConfig {
    pub fn to_grade_level(&self) -> (GradeLevel, Vec<ConfigIssue>) {
        match GradeLevel::try_new(self.grade_level.as_str()) {
            Some(grade) => (grade, Vec::new()),
            None => (
                GradeLevel::default(),
                vec![ConfigIssue::warning(
                    "prompt.grade_level",
                    format!("grade level is blank, using '{}'", GradeLevel::DEFAULT),
                )],
            ),
        }
    }
}
