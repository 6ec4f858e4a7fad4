//! Generation parameters: per-stage request settings.
//!
//! [`GenerationParams`] groups the static settings that shape each stage's
//! request in [`StageGenerator`](crate::use_cases::generate_stage::StageGenerator).

use forge_domain::{GradeLevel, Model, Stage, StageModels, StageSampling};

/// Request settings for the three generation stages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationParams {
    /// Model used by each stage.
    pub models: StageModels,
    /// Sampling temperature used by each stage.
    pub sampling: StageSampling,
    /// Audience the prompts are written for.
    pub grade: GradeLevel,
}

impl GenerationParams {
    // ==================== Builder Methods ====================

    pub fn with_models(mut self, models: StageModels) -> Self {
        self.models = models;
        self
    }

    pub fn with_sampling(mut self, sampling: StageSampling) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn with_grade(mut self, grade: GradeLevel) -> Self {
        self.grade = grade;
        self
    }

    // ==================== Accessors ====================

    pub fn model(&self, stage: Stage) -> &Model {
        self.models.for_stage(stage)
    }

    pub fn temperature(&self, stage: Stage) -> f32 {
        self.sampling.temperature(stage)
    }
}
