//! Generation domain entities

use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Stage of a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Derive assessment criteria from the curriculum description
    Criteria,
    /// Write three questions that satisfy the criteria
    Questions,
    /// Explain each question step by step
    Solutions,
}

impl Stage {
    /// All stages in execution order
    pub const ALL: [Stage; 3] = [Stage::Criteria, Stage::Questions, Stage::Solutions];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Criteria => "criteria",
            Stage::Questions => "questions",
            Stage::Solutions => "solutions",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::Criteria => "Criteria",
            Stage::Questions => "Questions",
            Stage::Solutions => "Solutions",
        }
    }

    /// 1-based position in the chain
    pub fn number(&self) -> usize {
        match self {
            Stage::Criteria => 1,
            Stage::Questions => 2,
            Stage::Solutions => 3,
        }
    }

    /// Marker prefix for a failed stage's output text
    pub fn error_prefix(&self) -> String {
        format!("Error generating {}:", self.as_str())
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Per-stage model selection.
///
/// Criteria generation wants a stable, instruction-following model; the
/// question and solution stages default to a reasoning model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageModels {
    pub criteria: Model,
    pub questions: Model,
    pub solutions: Model,
}

impl Default for StageModels {
    fn default() -> Self {
        Self {
            criteria: Model::default_criteria(),
            questions: Model::default_generation(),
            solutions: Model::default_generation(),
        }
    }
}

impl StageModels {
    pub fn with_criteria(mut self, model: Model) -> Self {
        self.criteria = model;
        self
    }

    pub fn with_questions(mut self, model: Model) -> Self {
        self.questions = model;
        self
    }

    pub fn with_solutions(mut self, model: Model) -> Self {
        self.solutions = model;
        self
    }

    pub fn for_stage(&self, stage: Stage) -> &Model {
        match stage {
            Stage::Criteria => &self.criteria,
            Stage::Questions => &self.questions,
            Stage::Solutions => &self.solutions,
        }
    }
}

/// Per-stage sampling temperature.
///
/// Criteria is pinned to 0 so the rubric is reproducible; questions and
/// solutions sample at 1 and may legitimately differ between runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageSampling {
    pub criteria: f32,
    pub questions: f32,
    pub solutions: f32,
}

impl Default for StageSampling {
    fn default() -> Self {
        Self {
            criteria: 0.0,
            questions: 1.0,
            solutions: 1.0,
        }
    }
}

impl StageSampling {
    pub fn temperature(&self, stage: Stage) -> f32 {
        match stage {
            Stage::Criteria => self.criteria,
            Stage::Questions => self.questions,
            Stage::Solutions => self.solutions,
        }
    }
}
