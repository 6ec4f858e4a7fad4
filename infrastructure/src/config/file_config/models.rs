//! Per-stage model selection from TOML (`[models]` section)

use crate::config::validation::ConfigIssue;
use forge_domain::{Model, StageModels};
use serde::{Deserialize, Serialize};

/// Per-stage model selection from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// criteria = "gpt-4"        # Rubric derivation (temperature 0)
/// questions = "o1-mini"     # Question writing
/// solutions = "o1-mini"     # Step-by-step explanations
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    pub criteria: Option<String>,
    pub questions: Option<String>,
    pub solutions: Option<String>,
}

impl FileModelsConfig {
    /// Parse a single model string, collecting an issue for an empty name.
    fn parse_single_model(
        field: &str,
        value: Option<&String>,
    ) -> (Option<Model>, Vec<ConfigIssue>) {
        match value.map(|s| Model::try_from_name(s)) {
            None => (None, Vec::new()),
            Some(Ok(model)) => (Some(model), Vec::new()),
            Some(Err(e)) => (
                None,
                vec![ConfigIssue::error(format!("models.{}", field), e.to_string())],
            ),
        }
    }

    /// Resolve into [`StageModels`], falling back to the defaults for unset
    /// or invalid entries.
    pub fn to_stage_models(&self) -> (StageModels, Vec<ConfigIssue>) {
        let mut models = StageModels::default();
        let mut issues = Vec::new();

        let (criteria, i) = Self::parse_single_model("criteria", self.criteria.as_ref());
        issues.extend(i);
        if let Some(m) = criteria {
            models = models.with_criteria(m);
        }

        let (questions, i) = Self::parse_single_model("questions", self.questions.as_ref());
        issues.extend(i);
        if let Some(m) = questions {
            models = models.with_questions(m);
        }

        let (solutions, i) = Self::parse_single_model("solutions", self.solutions.as_ref());
        issues.extend(i);
        if let Some(m) = solutions {
            models = models.with_solutions(m);
        }

        (models, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_uses_defaults() {
        let (models, issues) = FileModelsConfig::default().to_stage_models();
        assert_eq!(models, StageModels::default());
        assert!(issues.is_empty());
    }

    #[test]
    fn test_overrides() {
        let config = FileModelsConfig {
            criteria: Some("gpt-4o".to_string()),
            questions: None,
            solutions: Some("llama-3.1-70b".to_string()),
        };
        let (models, issues) = config.to_stage_models();
        assert!(issues.is_empty());
        assert_eq!(models.criteria, Model::Gpt4o);
        assert_eq!(models.questions, Model::O1Mini);
        assert_eq!(models.solutions, Model::Custom("llama-3.1-70b".to_string()));
    }

    #[test]
    fn test_empty_name_is_error() {
        let config = FileModelsConfig {
            questions: Some("  ".to_string()),
            ..Default::default()
        };
        let (models, issues) = config.to_stage_models();
        assert_eq!(models.questions, Model::O1Mini);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert_eq!(issues[0].field, "models.questions");
    }
}
