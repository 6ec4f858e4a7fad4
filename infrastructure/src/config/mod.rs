//! Configuration file loading for question-forge
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `QUESTION_FORGE_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./question-forge.toml` or `./.question-forge.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/question-forge/config.toml`
//! 5. Default values

mod file_config;
mod loader;
mod validation;

pub use file_config::{
    FileConfig, FileModelsConfig, FileOutputConfig, FilePromptConfig, FileProviderConfig,
    FileSamplingConfig,
};
pub use loader::ConfigLoader;
pub use validation::{ConfigIssue, Severity};
