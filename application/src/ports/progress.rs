//! Progress notification port
//!
//! Defines the interface for reporting progress during a generation run.

use forge_domain::{Model, Stage, StageOutput};

/// Callback for progress updates during a generation run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinners, plain lines, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called right before a stage sends its request
    fn on_stage_start(&self, stage: Stage, model: &Model);

    /// Called once the stage has an output, successful or not
    fn on_stage_complete(&self, output: &StageOutput);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: Stage, _model: &Model) {}
    fn on_stage_complete(&self, _output: &StageOutput) {}
}
