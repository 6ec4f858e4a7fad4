//! Presentation layer for question-forge
//!
//! This crate contains the CLI definition, input readers, output
//! formatters and progress reporters.

pub mod cli;
pub mod config;
pub mod input;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::OutputConfig;
pub use input::{credential::prompt_for_api_key, text::TextSource};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
