//! CLI command definitions

use crate::input::text::TextSource;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for generation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every section: description, criteria, questions, solutions
    Full,
    /// Only the questions and their solutions
    Questions,
    /// JSON output
    Json,
}

impl From<OutputFormat> for forge_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => forge_domain::OutputFormat::Full,
            OutputFormat::Questions => forge_domain::OutputFormat::Questions,
            OutputFormat::Json => forge_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for question-forge
#[derive(Parser, Debug)]
#[command(name = "question-forge")]
#[command(author, version, about = "Generate TEKS-aligned practice questions with step-by-step solutions")]
#[command(long_about = r#"
question-forge turns a curriculum standard into three practice questions with
worked solutions, using an OpenAI-compatible chat-completion API.

The run has three stages, each fed by the one before:
1. Criteria:  derive assessment criteria from the description
2. Questions: write 3 original questions meeting those criteria
3. Solutions: explain each question step by step

The API key is taken from --api-key, then $OPENAI_API_KEY (or the variable
named by provider.api_key_env), then the config file, and is otherwise
asked for interactively.

Configuration is merged from (in priority order):
1. QUESTION_FORGE_<SECTION>__<KEY>        Environment variables
2. --config <path>                        Explicit config file
3. ./question-forge.toml                  Project-level config
4. ~/.config/question-forge/config.toml   Global config

Example:
  question-forge "Solve one-step addition problems within 100"
  question-forge -f teks.txt --samples-file samples.txt -o json
  echo "Compare numbers up to 1,000" | question-forge -
"#)]
pub struct Cli {
    /// Curriculum (TEKS) description; "-" reads it from stdin
    pub description: Option<String>,

    /// Read the curriculum description from a file
    #[arg(short = 'f', long, value_name = "PATH", conflicts_with = "description")]
    pub description_file: Option<PathBuf>,

    /// Sample questions to guide the style of generated questions
    #[arg(short, long, value_name = "TEXT")]
    pub samples: Option<String>,

    /// Read sample questions from a file
    #[arg(long, value_name = "PATH", conflicts_with = "samples")]
    pub samples_file: Option<PathBuf>,

    /// API key for the chat-completion service
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Never ask for the API key interactively
    #[arg(long)]
    pub no_prompt: bool,

    /// Model for the criteria stage
    #[arg(long, value_name = "MODEL")]
    pub criteria_model: Option<String>,

    /// Model for the questions stage
    #[arg(long, value_name = "MODEL")]
    pub questions_model: Option<String>,

    /// Model for the solutions stage
    #[arg(long, value_name = "MODEL")]
    pub solutions_model: Option<String>,

    /// Audience phrase used in prompts, e.g. "4th graders"
    #[arg(long, value_name = "GRADE")]
    pub grade: Option<String>,

    /// Base URL of an OpenAI-compatible API
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the operational log and a JSONL prompt/response transcript to this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Where the description comes from, if anywhere
    pub fn description_source(&self) -> Option<TextSource> {
        if let Some(path) = &self.description_file {
            return Some(TextSource::File(path.clone()));
        }
        self.description.as_deref().map(TextSource::from_arg)
    }

    /// Where the sample questions come from, if anywhere
    pub fn samples_source(&self) -> Option<TextSource> {
        if let Some(path) = &self.samples_file {
            return Some(TextSource::File(path.clone()));
        }
        self.samples
            .as_ref()
            .map(|s| TextSource::Inline(s.clone()))
    }
}
