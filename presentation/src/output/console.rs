//! Console output formatter for generation results

use colored::Colorize;
use forge_domain::{GenerationResult, OutputFormat, StageOutput};

pub const DESCRIPTION_LABEL: &str = "TEKS Description";
pub const CRITERIA_LABEL: &str = "Criteria";
pub const QUESTIONS_LABEL: &str = "Generated Questions";
pub const SOLUTIONS_LABEL: &str = "Generated Step-by-Step Solutions";

/// Formats generation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render in the requested format
    pub fn render(result: &GenerationResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(result),
            OutputFormat::Questions => Self::format_questions_only(result),
            OutputFormat::Json => Self::format_json(result),
        }
    }

    /// Format the complete result: description, criteria, questions, solutions.
    ///
    /// Labels are fixed and stage text is printed exactly as produced,
    /// error lines included.
    pub fn format(result: &GenerationResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("TEKS Question Generator"));
        output.push('\n');

        output.push_str(&Self::section_header(DESCRIPTION_LABEL));
        output.push_str(result.description.content());
        output.push('\n');

        output.push_str(&Self::stage_section(CRITERIA_LABEL, &result.criteria));
        output.push_str(&Self::stage_section(QUESTIONS_LABEL, &result.questions));
        output.push_str(&Self::stage_section(SOLUTIONS_LABEL, &result.solutions));

        output.push_str(&Self::footer());

        output
    }

    /// Format questions and solutions only (concise output)
    pub fn format_questions_only(result: &GenerationResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::stage_section(QUESTIONS_LABEL, &result.questions));
        output.push_str(&Self::stage_section(SOLUTIONS_LABEL, &result.solutions));

        output
    }

    /// Format as JSON
    pub fn format_json(result: &GenerationResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    fn stage_section(label: &str, output: &StageOutput) -> String {
        format!("{}{}\n", Self::section_header(label), output.text())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use forge_application::{
        CompletionRequest, GatewayError, GenerateQuestionSetInput, GenerateQuestionSetUseCase,
        GenerationParams, LlmGateway, StageGenerator,
    };
    use forge_domain::{ApiCredential, CurriculumDescription, SampleQuestions, Stage};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    const DESCRIPTION: &str = "Solve one-step addition problems within 100";
    const CRITERIA: &str = "Use numbers under 100; one-step; real-life context";
    const QUESTIONS: &str = "1. Mia has 23 apples and picks 45 more. How many apples does she have?\n\
2. A bus carries 38 people and 17 more get on. How many people are on the bus?\n\
3. Sam reads 52 pages on Monday and 29 on Tuesday. How many pages did he read?";
    const SOLUTIONS: &str = "1. Add 23 + 45. Ones: 3 + 5 = 8. Tens: 20 + 40 = 60. Answer: 68 apples.\n\
2. Add 38 + 17. Ones: 8 + 7 = 15. Tens: 30 + 10 = 40. 40 + 15 = 55 people.\n\
3. Add 52 + 29. Ones: 2 + 9 = 11. Tens: 50 + 20 = 70. 70 + 11 = 81 pages.";

    fn result(questions: StageOutput) -> GenerationResult {
        GenerationResult::new(
            CurriculumDescription::try_new(DESCRIPTION).unwrap(),
            SampleQuestions::none(),
            StageOutput::generated(Stage::Criteria, "gpt-4", CRITERIA),
            questions,
            StageOutput::generated(Stage::Solutions, "o1-mini", SOLUTIONS),
        )
    }

    fn position(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("missing {needle:?}"))
    }

    #[test]
    fn test_full_output_shows_every_section_verbatim_in_order() {
        let result = result(StageOutput::generated(Stage::Questions, "o1-mini", QUESTIONS));
        let output = ConsoleFormatter::format(&result);

        let labels = [DESCRIPTION_LABEL, CRITERIA_LABEL, QUESTIONS_LABEL, SOLUTIONS_LABEL];
        let positions: Vec<_> = labels.iter().map(|l| position(&output, l)).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        for text in [DESCRIPTION, CRITERIA, QUESTIONS, SOLUTIONS] {
            assert!(output.contains(text));
        }
        assert!(!output.contains("gpt-4"));
    }

    #[test]
    fn test_failed_stage_uses_same_labels_and_verbatim_text() {
        let failed = StageOutput::failed(Stage::Questions, "o1-mini", "Request timed out");
        let failed_output = ConsoleFormatter::format(&result(failed));
        let ok_output = ConsoleFormatter::format(&result(StageOutput::generated(
            Stage::Questions,
            "o1-mini",
            QUESTIONS,
        )));

        assert!(failed_output.contains("Error generating questions: Request timed out"));
        assert_eq!(
            failed_output.replace("Error generating questions: Request timed out", ""),
            ok_output.replace(QUESTIONS, "")
        );
        assert!(!failed_output.contains("failed"));
        assert!(!failed_output.contains("o1-mini"));
    }

    #[test]
    fn test_samples_are_not_a_section() {
        let mut result = result(StageOutput::generated(Stage::Questions, "o1-mini", QUESTIONS));
        result.sample_questions = SampleQuestions::new("What is 10 + 5?");
        let output = ConsoleFormatter::format(&result);
        assert!(!output.contains("What is 10 + 5?"));
    }

    #[test]
    fn test_questions_only_skips_description_and_criteria() {
        let result = result(StageOutput::generated(Stage::Questions, "o1-mini", QUESTIONS));
        let output = ConsoleFormatter::render(&result, OutputFormat::Questions);

        assert!(output.contains(QUESTIONS));
        assert!(output.contains(SOLUTIONS));
        assert!(!output.contains(DESCRIPTION_LABEL));
        assert!(!output.contains(CRITERIA));
    }

    /// Gateway answering with fixed replies in order.
    struct CannedGateway {
        replies: Mutex<VecDeque<String>>,
    }

    #[async_trait]
    impl LlmGateway for CannedGateway {
        async fn complete(
            &self,
            _request: &CompletionRequest,
            _credential: &ApiCredential,
        ) -> Result<String, GatewayError> {
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .ok_or(GatewayError::EmptyResponse)
        }
    }

    #[tokio::test]
    async fn test_generated_run_renders_every_value_verbatim() {
        let gateway = Arc::new(CannedGateway {
            replies: Mutex::new(VecDeque::from([
                CRITERIA.to_string(),
                QUESTIONS.to_string(),
                SOLUTIONS.to_string(),
            ])),
        });
        let use_case = GenerateQuestionSetUseCase::new(StageGenerator::new(
            gateway,
            GenerationParams::default(),
        ));
        let credential = ApiCredential::try_new("sk-test").unwrap();

        let result = use_case
            .execute(GenerateQuestionSetInput::new(DESCRIPTION), Some(&credential))
            .await
            .unwrap();
        let output = ConsoleFormatter::format(&result);

        let sections = [
            (DESCRIPTION_LABEL, DESCRIPTION),
            (CRITERIA_LABEL, CRITERIA),
            (QUESTIONS_LABEL, QUESTIONS),
            (SOLUTIONS_LABEL, SOLUTIONS),
        ];
        let mut cursor = 0;
        for (label, value) in sections {
            let label_at = cursor + position(&output[cursor..], label);
            let value_at = label_at + position(&output[label_at..], value);
            cursor = value_at + value.len();
        }
        assert!(cursor < output.len());
    }

    #[test]
    fn test_json_output() {
        let failed = StageOutput::failed(Stage::Questions, "o1-mini", "Rate limited");
        let output = ConsoleFormatter::render(&result(failed), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["description"], DESCRIPTION);
        assert_eq!(value["criteria"]["text"], CRITERIA);
        assert_eq!(value["criteria"]["status"], "generated");
        assert_eq!(value["questions"]["status"], "failed");
        assert_eq!(value["questions"]["reason"], "Rate limited");
        assert_eq!(value["solutions"]["model"], "o1-mini");
    }
}
