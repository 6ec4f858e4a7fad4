//! Generation value objects - immutable result types for a generation run.
//!
//! - [`StageOutput`] - the text one stage produced, tagged with its outcome
//! - [`GenerationResult`] - the inputs plus all three stage outputs

use super::entities::Stage;
use crate::core::curriculum::{CurriculumDescription, SampleQuestions};
use serde::{Deserialize, Serialize};

/// How a stage's text came to be
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StageOutcome {
    /// The service answered; the text is its trimmed response
    Generated,
    /// The call failed; the text is the rendered error line
    Failed { reason: String },
}

/// Output of a single stage
///
/// Regardless of outcome, [`StageOutput::text`] is what the next stage
/// consumes and what gets displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageOutput {
    pub stage: Stage,
    /// Model the request was addressed to
    pub model: String,
    text: String,
    #[serde(flatten)]
    pub outcome: StageOutcome,
}

impl StageOutput {
    /// Creates a successful output. Surrounding whitespace is trimmed.
    pub fn generated(stage: Stage, model: impl Into<String>, text: &str) -> Self {
        Self {
            stage,
            model: model.into(),
            text: text.trim().to_string(),
            outcome: StageOutcome::Generated,
        }
    }

    /// Creates a failed output whose text reads
    /// `Error generating <stage>: <reason>`.
    pub fn failed(stage: Stage, model: impl Into<String>, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self {
            stage,
            model: model.into(),
            text: format!("{} {}", stage.error_prefix(), reason),
            outcome: StageOutcome::Failed { reason },
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, StageOutcome::Generated)
    }

    /// Failure detail, if the stage failed
    pub fn failure_reason(&self) -> Option<&str> {
        match &self.outcome {
            StageOutcome::Failed { reason } => Some(reason),
            StageOutcome::Generated => None,
        }
    }
}

/// Complete result of a generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub description: CurriculumDescription,
    pub sample_questions: SampleQuestions,
    pub criteria: StageOutput,
    pub questions: StageOutput,
    pub solutions: StageOutput,
}

impl GenerationResult {
    pub fn new(
        description: CurriculumDescription,
        sample_questions: SampleQuestions,
        criteria: StageOutput,
        questions: StageOutput,
        solutions: StageOutput,
    ) -> Self {
        Self {
            description,
            sample_questions,
            criteria,
            questions,
            solutions,
        }
    }

    /// Stage outputs in execution order
    pub fn stages(&self) -> [&StageOutput; 3] {
        [&self.criteria, &self.questions, &self.solutions]
    }

    /// Stages whose remote call failed
    pub fn failed_stages(&self) -> Vec<Stage> {
        self.stages()
            .into_iter()
            .filter(|o| !o.is_success())
            .map(|o| o.stage)
            .collect()
    }
}
