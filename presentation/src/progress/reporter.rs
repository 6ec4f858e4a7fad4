//! Progress reporting for a generation run

use colored::Colorize;
use forge_application::ProgressNotifier;
use forge_domain::{Model, Stage, StageOutput};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with one spinner per stage, drawn on stderr
pub struct ProgressReporter {
    current: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn stage_prefix(stage: Stage) -> String {
        format!("Stage {}/{}", stage.number(), Stage::ALL.len())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: Stage, model: &Model) {
        let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        pb.set_style(Self::spinner_style());
        pb.set_prefix(Self::stage_prefix(stage));
        pb.set_message(format!("Generating {}... ({})", stage.as_str(), model));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut current) = self.current.lock() {
            *current = Some(pb);
        }
    }

    fn on_stage_complete(&self, output: &StageOutput) {
        let Ok(mut current) = self.current.lock() else {
            return;
        };
        if let Some(pb) = current.take() {
            let status = if output.is_success() {
                format!("{} {}", "✓".green(), output.stage.display_name())
            } else {
                format!("{} {} failed", "✗".red(), output.stage.display_name())
            };
            pb.finish_with_message(status);
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: Stage, model: &Model) {
        eprintln!(
            "{} {} {}",
            "->".cyan(),
            ProgressReporter::stage_prefix(stage).bold(),
            format!("{} ({})", stage.display_name(), model).dimmed()
        );
    }

    fn on_stage_complete(&self, output: &StageOutput) {
        match output.failure_reason() {
            None => eprintln!("  {} {}", "v".green(), output.model),
            Some(reason) => eprintln!("  {} {} ({})", "x".red(), output.model, reason),
        }
    }
}
