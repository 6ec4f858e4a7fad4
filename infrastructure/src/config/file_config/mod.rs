//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod models;
mod output;
mod prompt;
mod provider;
mod sampling;

pub use models::FileModelsConfig;
pub use output::FileOutputConfig;
pub use prompt::FilePromptConfig;
pub use provider::FileProviderConfig;
pub use sampling::FileSamplingConfig;

use super::validation::ConfigIssue;
use forge_application::GenerationParams;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Per-stage model selection
    pub models: FileModelsConfig,
    /// Per-stage sampling temperature
    pub sampling: FileSamplingConfig,
    /// Prompt wording settings
    pub prompt: FilePromptConfig,
    /// Chat-completion endpoint and credential lookup
    pub provider: FileProviderConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.models.to_stage_models().1);
        issues.extend(self.sampling.to_stage_sampling().1);
        issues.extend(self.prompt.to_grade_level().1);
        issues.extend(self.provider.validate());
        issues
    }

    /// Build the use case parameters. Invalid entries resolve to defaults;
    /// call [`FileConfig::validate`] to surface them.
    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams::default()
            .with_models(self.models.to_stage_models().0)
            .with_sampling(self.sampling.to_stage_sampling().0)
            .with_grade(self.prompt.to_grade_level().0)
    }
}
