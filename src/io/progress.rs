//! Batch progress display for multi-file processing

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for batch pattern generation
///
/// Quantization of a single file is a single-shot operation, so progress is
/// tracked per file rather than per iteration.
#[derive(Default)]
pub struct ProgressManager {
    batch_bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a new progress manager
    pub const fn new() -> Self {
        Self { batch_bar: None }
    }

    /// Initialize the batch bar for the given file count
    pub fn initialize(&mut self, file_count: usize) {
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.batch_bar = Some(bar);
    }

    /// Show the file currently being processed
    pub fn start_file(&self, path: &Path) {
        if let Some(ref bar) = self.batch_bar {
            bar.set_message(
                path.file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string(),
            );
        }
    }

    /// Mark one file as completed
    pub fn complete_file(&self) {
        if let Some(ref bar) = self.batch_bar {
            bar.inc(1);
        }
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.batch_bar {
            bar.finish_with_message("All files processed");
        }
    }
}
