//! Generate Question Set use case
//!
//! Orchestrates the full criteria → questions → solutions chain.

use super::generate_stage::StageGenerator;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use forge_domain::{
    ApiCredential, CurriculumDescription, DomainError, GenerationResult, SampleQuestions,
};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that prevent a run from starting.
///
/// Once the inputs are valid the run always completes; stage failures are
/// reported inside the [`GenerationResult`], never here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("{0}")]
    InvalidInput(#[from] DomainError),
}

/// Raw user input for the [`GenerateQuestionSetUseCase`].
#[derive(Debug, Clone, Default)]
pub struct GenerateQuestionSetInput {
    /// Curriculum description as typed; required.
    pub description: String,
    /// Sample questions as typed; blank means none.
    pub sample_questions: String,
}

impl GenerateQuestionSetInput {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            sample_questions: String::new(),
        }
    }

    pub fn with_sample_questions(mut self, samples: impl Into<String>) -> Self {
        self.sample_questions = samples.into();
        self
    }
}

/// Use case for generating a question set.
///
/// 1. Validate the description, then the credential (no remote call on failure)
/// 2. Stage 1: criteria
/// 3. Stage 2: questions, fed with stage 1's text
/// 4. Stage 3: solutions, fed with stage 2's text
///
/// A stage's text is forwarded whether or not its request succeeded.
#[derive(Clone)]
pub struct GenerateQuestionSetUseCase {
    generator: StageGenerator,
}

impl GenerateQuestionSetUseCase {
    pub fn new(generator: StageGenerator) -> Self {
        Self { generator }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: GenerateQuestionSetInput,
        credential: Option<&ApiCredential>,
    ) -> Result<GenerationResult, GenerateError> {
        self.execute_with_progress(input, credential, &NoProgress)
            .await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: GenerateQuestionSetInput,
        credential: Option<&ApiCredential>,
        progress: &dyn ProgressNotifier,
    ) -> Result<GenerationResult, GenerateError> {
        let description = CurriculumDescription::try_new(input.description)
            .ok_or(DomainError::MissingDescription)?;
        let credential = credential.ok_or(DomainError::MissingCredential)?;
        let samples = SampleQuestions::new(input.sample_questions);

        info!(
            "Starting generation (samples provided: {})",
            samples.is_provided()
        );

        let criteria = self
            .generator
            .generate_criteria(&description, credential, progress)
            .await;

        let questions = self
            .generator
            .generate_questions(
                &description,
                &samples,
                criteria.text(),
                credential,
                progress,
            )
            .await;

        let solutions = self
            .generator
            .generate_solutions(questions.text(), credential, progress)
            .await;

        let result = GenerationResult::new(description, samples, criteria, questions, solutions);

        let failed = result.failed_stages();
        if failed.is_empty() {
            info!("Generation completed");
        } else {
            warn!("Generation completed with {} failed stage(s)", failed.len());
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationParams;
    use crate::ports::llm_gateway::GatewayError;
    use crate::use_cases::test_support::{RecordingProgress, ScriptedGateway};
    use std::sync::Arc;

    fn credential() -> ApiCredential {
        ApiCredential::try_new("sk-test").unwrap()
    }

    fn use_case(gateway: &Arc<ScriptedGateway>) -> GenerateQuestionSetUseCase {
        GenerateQuestionSetUseCase::new(StageGenerator::new(
            gateway.clone(),
            GenerationParams::default(),
        ))
    }

    fn all_ok() -> Vec<Result<String, GatewayError>> {
        vec![
            Ok("Use numbers under 100".to_string()),
            Ok("1. Q1\n2. Q2\n3. Q3".to_string()),
            Ok("Step 1: add".to_string()),
        ]
    }

    #[tokio::test]
    async fn test_blank_description_makes_no_calls() {
        for blank in ["", "   ", "\n\t"] {
            let gateway = Arc::new(ScriptedGateway::new(all_ok()));
            let err = use_case(&gateway)
                .execute(GenerateQuestionSetInput::new(blank), Some(&credential()))
                .await
                .unwrap_err();

            assert_eq!(err, GenerateError::InvalidInput(DomainError::MissingDescription));
            assert_eq!(err.to_string(), "TEKS description is required!");
            assert_eq!(gateway.call_count(), 0);
        }
    }

    #[tokio::test]
    async fn test_description_checked_before_credential() {
        let gateway = Arc::new(ScriptedGateway::new(all_ok()));
        let err = use_case(&gateway)
            .execute(GenerateQuestionSetInput::new(""), None)
            .await
            .unwrap_err();

        assert_eq!(err, GenerateError::InvalidInput(DomainError::MissingDescription));
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_credential_makes_no_calls() {
        let gateway = Arc::new(ScriptedGateway::new(all_ok()));
        let blank = ApiCredential::try_new("   ");
        let err = use_case(&gateway)
            .execute(
                GenerateQuestionSetInput::new("Add within 100"),
                blank.as_ref(),
            )
            .await
            .unwrap_err();

        assert_eq!(err, GenerateError::InvalidInput(DomainError::MissingCredential));
        assert_eq!(err.to_string(), "API Key is required!");
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_successful_run_produces_three_outputs() {
        let gateway = Arc::new(ScriptedGateway::new(all_ok()));
        let progress = RecordingProgress::default();

        let result = use_case(&gateway)
            .execute_with_progress(
                GenerateQuestionSetInput::new("Add within 100"),
                Some(&credential()),
                &progress,
            )
            .await
            .unwrap();

        assert!(result.failed_stages().is_empty());
        for output in result.stages() {
            assert!(!output.text().is_empty());
        }
        assert_eq!(gateway.call_count(), 3);
        assert_eq!(
            progress.events(),
            vec![
                "start criteria gpt-4",
                "complete criteria ok",
                "start questions o1-mini",
                "complete questions ok",
                "start solutions o1-mini",
                "complete solutions ok",
            ]
        );
    }

    #[tokio::test]
    async fn test_each_stage_feeds_the_next() {
        let gateway = Arc::new(ScriptedGateway::new(all_ok()));

        use_case(&gateway)
            .execute(
                GenerateQuestionSetInput::new("Add within 100"),
                Some(&credential()),
            )
            .await
            .unwrap();

        let requests = gateway.requests();
        assert!(requests[1].prompt.contains("- Use numbers under 100\n"));
        assert!(requests[2].prompt.contains("1. Q1\n2. Q2\n3. Q3"));
    }

    #[tokio::test]
    async fn test_stage_one_failure_flows_into_stage_two() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Err(GatewayError::ConnectionError("connection refused".to_string())),
            Ok("1. Q1\n2. Q2\n3. Q3".to_string()),
            Ok("Step 1: add".to_string()),
        ]));

        let result = use_case(&gateway)
            .execute(
                GenerateQuestionSetInput::new("Add within 100"),
                Some(&credential()),
            )
            .await
            .unwrap();

        let expected = "Error generating criteria: Connection error: connection refused";
        assert_eq!(result.criteria.text(), expected);
        assert!(!result.criteria.is_success());
        assert!(result.questions.is_success());
        assert!(result.solutions.is_success());
        assert_eq!(gateway.call_count(), 3);
        assert!(gateway.requests()[1].prompt.contains(expected));
    }

    #[tokio::test]
    async fn test_all_stages_failing_still_completes() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Err(GatewayError::Timeout),
            Err(GatewayError::Timeout),
            Err(GatewayError::Timeout),
        ]));

        let result = use_case(&gateway)
            .execute(
                GenerateQuestionSetInput::new("Add within 100"),
                Some(&credential()),
            )
            .await
            .unwrap();

        assert_eq!(result.failed_stages().len(), 3);
        assert_eq!(result.solutions.text(), "Error generating solutions: Timeout");
        assert!(
            gateway.requests()[2]
                .prompt
                .contains("Error generating questions: Timeout")
        );
    }

    #[tokio::test]
    async fn test_omitted_samples_use_placeholder() {
        let gateway = Arc::new(ScriptedGateway::new(all_ok()));

        let result = use_case(&gateway)
            .execute(
                GenerateQuestionSetInput::new("Add within 100").with_sample_questions("  "),
                Some(&credential()),
            )
            .await
            .unwrap();

        assert!(!result.sample_questions.is_provided());
        assert!(
            gateway.requests()[1]
                .prompt
                .contains("And the provided sample questions:\nNone provided\n")
        );
    }

    #[tokio::test]
    async fn test_samples_are_embedded() {
        let gateway = Arc::new(ScriptedGateway::new(all_ok()));

        use_case(&gateway)
            .execute(
                GenerateQuestionSetInput::new("Add within 100")
                    .with_sample_questions("1. Roger has two boxes of nails."),
                Some(&credential()),
            )
            .await
            .unwrap();

        let prompt = &gateway.requests()[1].prompt;
        assert!(prompt.contains("1. Roger has two boxes of nails."));
        assert!(!prompt.contains("None provided"));
    }
}
