//! Progress display across a batch of creations

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Tracks creations completed and generations evolved in the current creation
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    generation_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager drawing to stderr
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            generation_bar: None,
        }
    }

    /// Create a manager that draws nothing
    pub fn hidden() -> Self {
        Self {
            multi_progress: MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
            batch_bar: None,
            generation_bar: None,
        }
    }

    /// Prepare bars for `creations` creations
    ///
    /// A batch bar is shown only when there is more than one creation.
    pub fn initialize(&mut self, creations: usize) {
        if creations > 1 {
            let batch_bar = ProgressBar::new(creations as u64);
            batch_bar.set_style(Self::batch_style());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let generation_bar = ProgressBar::new(0);
        generation_bar.set_style(Self::generation_style());
        self.generation_bar = Some(self.multi_progress.add(generation_bar));
    }

    /// Reset the generation bar for a creation evolving `steps` generations
    pub fn start_creation(&self, number: usize, steps: usize) {
        if let Some(ref bar) = self.generation_bar {
            bar.set_length(steps as u64);
            bar.set_position(0);
            bar.set_prefix(format!("Creation #{number}"));
        }
    }

    /// Report the generation just evolved
    pub fn update_generation(&self, generation: usize) {
        if let Some(ref bar) = self.generation_bar {
            bar.set_position(generation as u64);
        }
    }

    /// Count a creation as done
    pub fn complete_creation(&self) {
        if let Some(ref bar) = self.batch_bar {
            bar.inc(1);
        }
    }

    /// Run `f` with the bars hidden so console output is not interleaved
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.multi_progress.suspend(f)
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref bar) = self.batch_bar {
            bar.finish_with_message("All creations rendered");
        }
        if let Some(ref bar) = self.generation_bar {
            bar.finish_and_clear();
        }
        let _ = self.multi_progress.clear();
    }

    /// Position and length of the generation bar, if initialized
    pub fn generation_progress(&self) -> Option<(u64, u64)> {
        self.generation_bar
            .as_ref()
            .map(|bar| (bar.position(), bar.length().unwrap_or(0)))
    }

    /// Creations counted by the batch bar, if shown
    pub fn completed_creations(&self) -> Option<u64> {
        self.batch_bar.as_ref().map(ProgressBar::position)
    }

    fn batch_style() -> ProgressStyle {
        let template = format!(
            "[{{elapsed_precise}}] Creations: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        );
        ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }

    fn generation_style() -> ProgressStyle {
        let template = format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} generations"
        );
        ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ")
    }
}
