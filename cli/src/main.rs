//! CLI entrypoint for question-forge
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use forge_application::{
    GenerateQuestionSetInput, GenerateQuestionSetUseCase, GenerationParams, NoProgress,
    ProgressNotifier, StageGenerator,
};
use forge_domain::{ApiCredential, GradeLevel, Model};
use forge_infrastructure::{ConfigLoader, FileConfig, JsonlConversationLogger, OpenAiChatGateway};
use forge_presentation::{
    Cli, ConsoleFormatter, OutputConfig, ProgressReporter, SimpleProgress, prompt_for_api_key,
};
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, cli.log_dir.as_deref());

    info!("Starting question-forge");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            eprintln!("{} {}", "config error:".red().bold(), issue);
        } else {
            eprintln!("{} {}", "config warning:".yellow().bold(), issue);
        }
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Invalid configuration");
    }

    let output_config = OutputConfig::resolve(
        cli.output.map(Into::into),
        config.output.format,
        cli.no_color,
        config.output.color,
        cli.quiet,
    );
    if !output_config.color {
        colored::control::set_override(false);
    }

    let params = apply_overrides(config.generation_params(), &cli)?;

    // === Dependency Injection ===
    let base_url = cli
        .base_url
        .clone()
        .unwrap_or_else(|| config.provider.base_url.clone());
    let gateway = Arc::new(OpenAiChatGateway::new(&base_url, config.provider.timeout())?);
    info!("Using endpoint {}", gateway.endpoint());

    let mut generator = StageGenerator::new(gateway, params);
    if let Some(dir) = &cli.log_dir
        && let Some(logger) = JsonlConversationLogger::for_run(dir)
    {
        info!("Writing transcript to {}", logger.path().display());
        generator = generator.with_conversation_logger(Arc::new(logger));
    }
    let use_case = GenerateQuestionSetUseCase::new(generator);

    // === Input ===
    let description = match cli.description_source() {
        Some(source) => source.read().context("Failed to read TEKS description")?,
        None => String::new(),
    };
    let samples = match cli.samples_source() {
        Some(source) => source.read().context("Failed to read sample questions")?,
        None => String::new(),
    };

    let credential = if description.trim().is_empty() {
        // The description error takes precedence; don't ask for a key first
        None
    } else {
        resolve_credential(&cli, &config)?
    };

    let input = GenerateQuestionSetInput::new(description).with_sample_questions(samples);

    // Execute with or without progress reporting
    let progress: Box<dyn ProgressNotifier> = if !output_config.show_progress {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let result = match use_case
        .execute_with_progress(input, credential.as_ref(), progress.as_ref())
        .await
    {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            return Ok(ExitCode::from(2));
        }
    };

    println!("{}", ConsoleFormatter::render(&result, output_config.format));

    Ok(ExitCode::SUCCESS)
}

/// Initialize logging based on verbosity level, adding a plain-text file
/// layer when a log directory is given.
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, guard) = match log_dir.map(file_appender) {
        Some(Ok(appender)) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(guard))
        }
        Some(Err(e)) => {
            // No subscriber yet, so this cannot go through tracing
            eprintln!(
                "{} file logging disabled: {}",
                "warning:".yellow().bold(),
                e
            );
            (None, None)
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

/// Non-rotating appender for `<dir>/question-forge.log`. Fails instead of
/// panicking when the directory cannot be created.
fn file_appender(dir: &Path) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("question-forge.log")
        .build(dir)
}

/// Layer command-line model and grade choices over the file config.
fn apply_overrides(mut params: GenerationParams, cli: &Cli) -> Result<GenerationParams> {
    if let Some(name) = &cli.criteria_model {
        params.models = params.models.with_criteria(parse_model(name, "--criteria-model")?);
    }
    if let Some(name) = &cli.questions_model {
        params.models = params.models.with_questions(parse_model(name, "--questions-model")?);
    }
    if let Some(name) = &cli.solutions_model {
        params.models = params.models.with_solutions(parse_model(name, "--solutions-model")?);
    }
    if let Some(grade) = &cli.grade {
        match GradeLevel::try_new(grade.as_str()) {
            Some(grade) => params.grade = grade,
            None => bail!("--grade cannot be empty"),
        }
    }
    Ok(params)
}

fn parse_model(name: &str, flag: &str) -> Result<Model> {
    Model::try_from_name(name).with_context(|| format!("Invalid {}", flag))
}

/// Flag, then environment or config file, then an interactive prompt.
fn resolve_credential(cli: &Cli, config: &FileConfig) -> Result<Option<ApiCredential>> {
    if let Some(key) = cli.api_key.as_deref().and_then(ApiCredential::try_new) {
        return Ok(Some(key));
    }
    if let Some(key) = config.provider.resolve_api_key() {
        return Ok(Some(key));
    }
    if cli.no_prompt || !std::io::stdin().is_terminal() {
        return Ok(None);
    }
    prompt_for_api_key().context("Failed to read API key")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_appender_reports_uncreatable_directory() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        assert!(file_appender(&blocker.join("logs")).is_err());
    }

    #[test]
    fn test_file_appender_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("logs");

        assert!(file_appender(&logs).is_ok());
        assert!(logs.is_dir());
    }
}
