//! Stage generators.
//!
//! One method per stage. Each builds its prompt, sends a single completion
//! request and turns the reply into a [`StageOutput`]. None of them return
//! an error: a failed request becomes a [`StageOutput::failed`] whose text
//! is what the caller passes on.

use crate::config::GenerationParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{CompletionRequest, LlmGateway};
use crate::ports::progress::ProgressNotifier;
use forge_domain::{
    ApiCredential, CurriculumDescription, PromptTemplate, SampleQuestions, Stage, StageOutput,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Runs individual generation stages against an [`LlmGateway`].
#[derive(Clone)]
pub struct StageGenerator {
    gateway: Arc<dyn LlmGateway>,
    params: GenerationParams,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl StageGenerator {
    pub fn new(gateway: Arc<dyn LlmGateway>, params: GenerationParams) -> Self {
        Self {
            gateway,
            params,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a transcript logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Stage 1: assessment criteria for the description.
    pub async fn generate_criteria(
        &self,
        description: &CurriculumDescription,
        credential: &ApiCredential,
        progress: &dyn ProgressNotifier,
    ) -> StageOutput {
        let prompt = PromptTemplate::criteria_prompt(description, &self.params.grade);
        self.run_stage(Stage::Criteria, prompt, credential, progress)
            .await
    }

    /// Stage 2: three questions. `criteria` is used as-is, including when it
    /// is the error text of a failed stage 1.
    pub async fn generate_questions(
        &self,
        description: &CurriculumDescription,
        samples: &SampleQuestions,
        criteria: &str,
        credential: &ApiCredential,
        progress: &dyn ProgressNotifier,
    ) -> StageOutput {
        let prompt =
            PromptTemplate::questions_prompt(description, samples, criteria, &self.params.grade);
        self.run_stage(Stage::Questions, prompt, credential, progress)
            .await
    }

    /// Stage 3: step-by-step solutions for `questions`.
    pub async fn generate_solutions(
        &self,
        questions: &str,
        credential: &ApiCredential,
        progress: &dyn ProgressNotifier,
    ) -> StageOutput {
        let prompt = PromptTemplate::solutions_prompt(questions, &self.params.grade);
        self.run_stage(Stage::Solutions, prompt, credential, progress)
            .await
    }

    async fn run_stage(
        &self,
        stage: Stage,
        prompt: String,
        credential: &ApiCredential,
        progress: &dyn ProgressNotifier,
    ) -> StageOutput {
        let model = self.params.model(stage).clone();
        let temperature = self.params.temperature(stage);

        info!(
            "Stage {}: generating {} with {} (temperature {})",
            stage.number(),
            stage.as_str(),
            model,
            temperature
        );
        progress.on_stage_start(stage, &model);

        self.conversation_logger.log(ConversationEvent::new(
            "stage_prompt",
            serde_json::json!({
                "stage": stage.as_str(),
                "model": model.to_string(),
                "temperature": temperature,
                "text": prompt,
            }),
        ));

        let request = CompletionRequest::new(model.clone(), prompt, temperature);
        let output = match self.gateway.complete(&request, credential).await {
            Ok(text) => {
                debug!("Stage {} returned {} bytes", stage.as_str(), text.len());
                StageOutput::generated(stage, model.to_string(), &text)
            }
            Err(e) => {
                warn!("Stage {} failed: {}", stage.as_str(), e);
                StageOutput::failed(stage, model.to_string(), e.to_string())
            }
        };

        self.conversation_logger.log(ConversationEvent::new(
            "stage_response",
            serde_json::json!({
                "stage": stage.as_str(),
                "model": output.model,
                "success": output.is_success(),
                "bytes": output.text().len(),
                "text": output.text(),
            }),
        ));

        progress.on_stage_complete(&output);
        output
    }
}
