//! Prep command implementation

use super::worker_pool;
use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader};
use crate::progress::TreeProgress;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use treeyid_core::{prepare_file, CorpusMods, PrepOptions};

/// Arguments for the prep command
#[derive(Debug, Args)]
pub struct PrepArgs {
    /// Input .psd files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Directory for the prepared files
    #[arg(short, long, value_name = "DIR", required = true)]
    pub output: PathBuf,
}

/// Tree counts for one prepared file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrepSummary {
    pub kept: usize,
    pub dropped: usize,
}

impl PrepArgs {
    /// Execute the prep command
    pub fn execute(&self, config: &CliConfig, quiet: bool) -> Result<()> {
        log::info!("Starting tree preparation");
        log::debug!("Arguments: {:?}", self);

        let files = resolve_patterns(&self.input)?;
        fs::create_dir_all(&self.output)
            .with_context(|| format!("Failed to create {}", self.output.display()))?;

        let options = config.prep_options();
        let mods = config.corpus_mods()?;

        let progress = TreeProgress::start("prep", files.len(), quiet);

        let pool = worker_pool(config)?;
        let summaries = pool.install(|| {
            files
                .par_iter()
                .map(|path| -> Result<PrepSummary> {
                    let stem = FileReader::stem(path)?;
                    let target = self.output.join(format!("{stem}.txt"));
                    let mods = config.wants_corpus_mods(&stem).then_some(&mods);
                    let summary = prep_file(path, &target, &options, mods)?;
                    progress.file_done(&stem, summary.kept);
                    Ok(summary)
                })
                .collect::<Result<Vec<_>>>()
        })?;
        progress.finish();

        let dropped: usize = summaries.iter().map(|s| s.dropped).sum();
        log::info!(
            "prepared {} files: {} trees kept, {dropped} dropped",
            files.len(),
            progress.trees()
        );
        Ok(())
    }
}

/// Prepare one `.psd` file and write its kept trees to `target`
pub fn prep_file(
    path: &Path,
    target: &Path,
    options: &PrepOptions,
    mods: Option<&CorpusMods>,
) -> Result<PrepSummary> {
    let content = FileReader::read_text(path)?;
    let prepared = prepare_file(&content, options, mods)
        .with_context(|| format!("Failed to prepare {}", path.display()))?;

    let mut out = String::new();
    let mut summary = PrepSummary {
        kept: 0,
        dropped: 0,
    };
    for tree in prepared.iter() {
        if tree.is_kept() {
            out.push_str(&tree.line());
            out.push('\n');
            summary.kept += 1;
        } else {
            summary.dropped += 1;
        }
    }

    fs::write(target, out).with_context(|| format!("Failed to write to {}", target.display()))?;
    log::debug!(
        "{}: {} kept, {} dropped",
        path.display(),
        summary.kept,
        summary.dropped
    );
    Ok(summary)
}
