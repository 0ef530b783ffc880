//! Per-file progress for the batch commands

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

const TEMPLATE: &str = "{prefix:>7} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}";

/// Counts finished files and the trees they held
///
/// Shared by reference across the worker pool, so the tree total is atomic.
pub struct TreeProgress {
    bar: Option<ProgressBar>,
    trees: AtomicUsize,
}

impl TreeProgress {
    /// A bar labelled with the command name, or nothing when `quiet`
    pub fn start(stage: &'static str, files: usize, quiet: bool) -> Self {
        let bar = (!quiet).then(|| {
            let bar = ProgressBar::new(files as u64);
            let style = ProgressStyle::default_bar()
                .template(TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("##-");
            bar.set_style(style);
            bar.set_prefix(stage);
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        });
        Self {
            bar,
            trees: AtomicUsize::new(0),
        }
    }

    pub fn file_done(&self, stem: &str, trees: usize) {
        let total = self.trees.fetch_add(trees, Ordering::Relaxed) + trees;
        if let Some(bar) = &self.bar {
            bar.set_message(format!("{stem} ({total} trees)"));
            bar.inc(1);
        }
    }

    pub fn trees(&self) -> usize {
        self.trees.load(Ordering::Relaxed)
    }

    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(format!("{} trees", self.trees()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_still_counts_trees() {
        let progress = TreeProgress::start("prep", 3, true);
        assert!(progress.bar.is_none());
        progress.file_done("1910e", 4);
        progress.file_done("1947e", 2);
        progress.finish();
        assert_eq!(progress.trees(), 6);
    }

    #[test]
    fn test_bar_counts_files() {
        let progress = TreeProgress::start("process", 2, false);
        progress.file_done("a", 1);
        progress.file_done("b", 0);
        let position = progress.bar.as_ref().map(ProgressBar::position);
        assert_eq!(position, Some(2));
        assert_eq!(progress.trees(), 1);
        progress.finish();
    }
}
