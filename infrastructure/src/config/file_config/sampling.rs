//! Per-stage sampling from TOML (`[sampling]` section)

use crate::config::validation::ConfigIssue;
use forge_domain::StageSampling;
use serde::{Deserialize, Serialize};

/// Highest temperature accepted by the chat-completion API
const MAX_TEMPERATURE: f32 = 2.0;

/// Per-stage sampling temperatures
///
/// ```toml
/// [sampling]
/// criteria = 0.0
/// questions = 1.0
/// solutions = 1.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSamplingConfig {
    pub criteria: f32,
    pub questions: f32,
    pub solutions: f32,
}

impl Default for FileSamplingConfig {
    fn default() -> Self {
        let defaults = StageSampling::default();
        Self {
            criteria: defaults.criteria,
            questions: defaults.questions,
            solutions: defaults.solutions,
        }
    }
}

impl FileSamplingConfig {
    /// Resolve into [`StageSampling`]; out-of-range values fall back to the
    /// stage default and are reported.
    pub fn to_stage_sampling(&self) -> (StageSampling, Vec<ConfigIssue>) {
        let defaults = StageSampling::default();
        let mut issues = Vec::new();

        let mut check = |field: &str, value: f32, fallback: f32| -> f32 {
            if (0.0..=MAX_TEMPERATURE).contains(&value) {
                value
            } else {
                issues.push(ConfigIssue::warning(
                    format!("sampling.{}", field),
                    format!(
                        "temperature {} is outside 0..={}, using {}",
                        value, MAX_TEMPERATURE, fallback
                    ),
                ));
                fallback
            }
        };

        let sampling = StageSampling {
            criteria: check("criteria", self.criteria, defaults.criteria),
            questions: check("questions", self.questions, defaults.questions),
            solutions: check("solutions", self.solutions, defaults.solutions),
        };

        (sampling, issues)
    }
}
