//! Progress reporting for advisory sessions

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;
use steward_application::AdvisoryProgress;

/// One progress bar per question, advanced as each agent answers.
///
/// Draws to stderr so stdout stays valid JSON.
pub struct ProgressReporter {
    multi: MultiProgress,
    question_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            question_bar: Mutex::new(None),
        }
    }

    fn question_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl AdvisoryProgress for ProgressReporter {
    fn on_question_start(&self, index: usize, total: usize, agent_count: usize) {
        let pb = self.multi.add(ProgressBar::new(agent_count as u64));
        pb.set_style(Self::question_style());
        pb.set_prefix(format!("Question {}/{}", index + 1, total));
        pb.set_message("Consulting...");

        if let Ok(mut bar) = self.question_bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_agent_complete(&self, _index: usize, agent: &str, success: bool) {
        if let Ok(bar) = self.question_bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            let status = if success {
                format!("{} {}", "v".green(), agent)
            } else {
                format!("{} {}", "x".red(), agent)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_question_complete(&self, index: usize) {
        if let Ok(mut bar) = self.question_bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_with_message(format!("question {} answered", index + 1).green().to_string());
        }
    }
}
