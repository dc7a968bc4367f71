//! Batch progress display for maze generation runs

use std::sync::LazyLock;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Mazes: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates the progress display for one batch of generation jobs
///
/// Jobs complete out of order when running on parallel threads, so the display
/// is a single batch bar advanced per finished maze rather than a bar per job.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress display for `job_count` generation jobs
    pub fn new(job_count: usize) -> Self {
        let multi_progress = MultiProgress::new();
        let batch_bar = ProgressBar::new(job_count as u64);
        batch_bar.set_style(BATCH_STYLE.clone());
        let batch_bar = multi_progress.add(batch_bar);

        Self {
            multi_progress,
            batch_bar,
        }
    }

    /// Record a completed job, showing the file it produced
    pub fn complete_job(&self, file_name: &str) {
        self.batch_bar.inc(1);
        self.batch_bar.set_message(format!("✓ {file_name}"));
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.batch_bar.finish_with_message("All mazes generated");
        let _ = self.multi_progress.clear();
    }
}
