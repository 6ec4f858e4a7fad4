//! Prompt templates for the three generation stages

use super::grade::GradeLevel;
use crate::core::curriculum::{CurriculumDescription, SampleQuestions};

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Stage 1: ask for assessment criteria derived from the description
    pub fn criteria_prompt(description: &CurriculumDescription, grade: &GradeLevel) -> String {
        format!(
            r#"Based on the following TEKS description:
"{description}"
Generate specific criteria for creating educational questions suitable for {grade}.
The criteria should include:
- Skills to be assessed
- Constraints on numbers or operations
- Any special considerations for the type of problems (e.g., one-step, two-step, real-life context).
Keep the criteria concise and aligned with the TEKS description."#,
            description = description.content(),
            grade = grade,
        )
    }

    /// Stage 2: ask for exactly three original questions.
    ///
    /// `criteria` is embedded verbatim as one of the constraints, whatever
    /// stage 1 produced.
    pub fn questions_prompt(
        description: &CurriculumDescription,
        samples: &SampleQuestions,
        criteria: &str,
        grade: &GradeLevel,
    ) -> String {
        format!(
            r#"You are an educational content creator specializing in test questions aligned with Texas Essential Knowledge and Skills (TEKS).
Based on the following TEKS description:
"{description}"
And the provided sample questions:
{samples}
Please generate 3 original questions. Ensure they meet these criteria:
- Suitable for {grade}
- Aligned with the provided TEKS
- {criteria}
- Vary contexts and ensure clarity.
Do not add an introductory or conclusion sentence. Just give the question."#,
            description = description.content(),
            samples = samples.prompt_text(),
            criteria = criteria,
            grade = grade,
        )
    }

    /// Stage 3: ask for step-by-step explanations of the questions
    pub fn solutions_prompt(questions: &str, grade: &GradeLevel) -> String {
        format!(
            r#"You are a math tutor helping {grade} learn addition and subtraction. For each math problem I provide, please produce a step-by-step solution that a {learner} can easily follow. Use the following guidelines:
- Clarity for a {learner}: Use simple language and explain what you're doing in each step, as if you're talking to a child learning math.
- Properties of Operations: Mention how properties of operations help solve the problem or check the work.
- Step-by-Step: Number each step and use clear, short sentences. Explain why you do each step.
- Encourage Understanding: Show how to check the answer or think about the problem in more than one way, if possible.

Please solve the following questions:
{questions}

Do not add an introductory or conclusion sentence."#,
            grade = grade,
            learner = grade.singular(),
            questions = questions,
        )
    }
}
