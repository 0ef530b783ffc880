//! Configuration module
//!
//! The configuration file is TOML. Every field has a default, so a file only
//! needs the settings it changes and no file at all gives the defaults.

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use treeyid_core::{
    CatalogueKind, CorpusMods, MetaHandling, PrepOptions, ProcessorConfig, TreeProcessor,
};

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub processing: ProcessingConfig,

    #[serde(default)]
    pub tables: TablesConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Processing-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Split-marking convention of the corpus
    pub catalogue: CatalogueKind,

    /// Keep paren codes as `OPAREN`/`CPAREN` tokens
    pub keep_parens: bool,

    pub meta: MetaHandling,

    /// Drop trees whose root is `META`
    pub drop_meta_roots: bool,

    /// File-stem prefixes whose merged children take their script forms
    /// from splitting the merged word
    pub script_split_prefixes: Vec<String>,

    /// File-stem prefixes that receive corpus modifications before preparation
    pub corpus_mod_prefixes: Vec<String>,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            catalogue: CatalogueKind::default(),
            keep_parens: false,
            meta: MetaHandling::default(),
            drop_meta_roots: false,
            script_split_prefixes: vec!["1910".to_string(), "1947".to_string()],
            corpus_mod_prefixes: vec!["1910".to_string(), "1947".to_string()],
        }
    }
}

/// Lookup-table configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct TablesConfig {
    /// Directory of substitute tables, named as the built-in ones
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// Tab-separated from/to replacement lists for corpus modifications
    pub corpus_changes: Vec<PathBuf>,
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Also write trees with script leaves
    pub write_script_trees: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty_json: true,
            write_script_trees: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl CliConfig {
    /// Load the file at `path`, or the defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::from_toml(&content)?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    pub fn prep_options(&self) -> PrepOptions {
        PrepOptions {
            keep_parens: self.processing.keep_parens,
            meta: self.processing.meta,
            drop_meta_roots: self.processing.drop_meta_roots,
        }
    }

    /// Build the tree processor over the configured tables
    pub fn processor(&self) -> Result<TreeProcessor> {
        let config = ProcessorConfig::builder()
            .catalogue(self.processing.catalogue)
            .script_trees(self.output.write_script_trees)
            .build();
        let processor = match &self.tables.dir {
            Some(dir) => TreeProcessor::from_table_dir(dir, config),
            None => TreeProcessor::embedded(config),
        };
        processor.context("Failed to load lookup tables")
    }

    /// Regex rewrites plus every configured replacement list
    pub fn corpus_mods(&self) -> Result<CorpusMods> {
        let mut mods = CorpusMods::new();
        for path in &self.tables.corpus_changes {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read corpus changes: {}", path.display()))?;
            mods.add_replacements(&content)
                .with_context(|| format!("Invalid corpus changes: {}", path.display()))?;
        }
        log::debug!("{} corpus replacements", mods.replacement_count());
        Ok(mods)
    }

    pub fn wants_script_split(&self, stem: &str) -> bool {
        has_prefix(&self.processing.script_split_prefixes, stem)
    }

    pub fn wants_corpus_mods(&self, stem: &str) -> bool {
        has_prefix(&self.processing.corpus_mod_prefixes, stem)
    }

    /// Worker count for file-level parallelism
    pub fn worker_threads(&self) -> usize {
        match self.performance.worker_threads {
            0 => num_cpus::get(),
            n => n,
        }
    }
}

fn has_prefix(prefixes: &[String], stem: &str) -> bool {
    prefixes.iter().any(|prefix| stem.starts_with(prefix.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = CliConfig::from_toml("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.processing.catalogue, CatalogueKind::Flags);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_partial_section() {
        let config = CliConfig::from_toml(
            "[processing]\ncatalogue = \"inline\"\nmeta = \"keep-empty\"\n\n[performance]\nworker_threads = 2\n",
        )
        .unwrap();
        assert_eq!(config.processing.catalogue, CatalogueKind::Inline);
        assert_eq!(config.processing.meta, MetaHandling::KeepEmpty);
        assert_eq!(config.processing.script_split_prefixes, vec!["1910", "1947"]);
        assert_eq!(config.worker_threads(), 2);
    }

    #[test]
    fn test_default_round_trips_through_toml() {
        let text = CliConfig::default().to_toml().unwrap();
        assert!(text.contains("[processing]"));
        assert!(text.contains("catalogue = \"flags\""));
        assert!(!text.contains("dir ="));
        assert_eq!(CliConfig::from_toml(&text).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_bad_value_is_config_error() {
        let error = CliConfig::from_toml("[processing]\ncatalogue = \"brackets\"\n").unwrap_err();
        assert!(error.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_prefixes() {
        let config = CliConfig::default();
        assert!(config.wants_script_split("1947e-royte-pomerantsn"));
        assert!(config.wants_corpus_mods("1910e-grine-felder"));
        assert!(!config.wants_script_split("1589-kuhbukh"));
    }

    #[test]
    fn test_auto_worker_threads() {
        assert!(CliConfig::default().worker_threads() >= 1);
    }

    #[test]
    fn test_load_missing_file() {
        let error = CliConfig::load(Some(Path::new("/nonexistent/treeyid.toml"))).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_corpus_changes_are_loaded() {
        let dir = TempDir::new().unwrap();
        let changes = dir.path().join("changes.tsv");
        fs::write(&changes, "N\tkind\tkinder\n(ADV a)\t(ADV b)\n").unwrap();
        let config = CliConfig {
            tables: TablesConfig {
                dir: None,
                corpus_changes: vec![changes],
            },
            ..CliConfig::default()
        };
        let mods = config.corpus_mods().unwrap();
        assert_eq!(mods.replacement_count(), 2);
        assert_eq!(mods.apply("(IP-MAT (N kind) (ADV a))"), "(IP-MAT (N kinder) (ADV b))");
    }
}
