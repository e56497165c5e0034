//! Terminal progress display over a run's editions

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static EDITION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Editions: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks completed editions on a single progress bar
///
/// A hidden manager accepts every call and draws nothing.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a visible progress manager
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(EDITION_STYLE.clone());
        Self { bar }
    }

    /// Create a manager that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Set the number of editions in the run
    pub fn initialize(&self, edition_count: u32) {
        self.bar.set_length(u64::from(edition_count));
        self.bar.set_position(0);
    }

    /// Mark an edition as written
    pub fn complete_edition(&self, edition: u32) {
        self.bar.set_message(format!("#{edition}"));
        self.bar.inc(1);
    }

    /// Run `f` with the bar cleared, redrawing it afterwards
    ///
    /// Terminal output written inside `f` does not interleave with the bar.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    /// Editions completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Finish and clear the display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
