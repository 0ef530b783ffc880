//! Per-tree processing: merge, convert, list and reintegrate
//!
//! [`TreeProcessor::process_tree`] takes one prepared tree and produces its
//! [`TreeRecord`]:
//!
//! 1. parse the tree and check it serializes back to the same text
//! 2. merge split tokens with the configured catalogue
//! 3. give every leaf its script form and phonetic code
//! 4. list the leaves and write their romanized text back into the tree
//!
//! Any structural error aborts the tree and names it.

use crate::error::{CoreError, Result};
use crate::leaf::Leaf;
use crate::merge::{CatalogueKind, MergeCatalogue};
use crate::record::{LeafInfo, TreeRecord, NO_TREE_ID};
use crate::reintegrate::{reintegrate, TextSource};
use crate::split_word::SplitRules;
use crate::tables::{read_table, LookupTables, LEXICON_FILE, SIMPLE_SPLITS_FILE};
use crate::translit::{ycode, Transliterator, Yivo};
use crate::tree::PsdTree;
use std::path::Path;
use std::sync::Arc;

/// Per-run processing options
#[derive(Debug, Clone, Default)]
pub struct ProcessorConfig {
    pub(crate) catalogue: CatalogueKind,
    pub(crate) script_split: bool,
    pub(crate) script_trees: bool,
}

impl ProcessorConfig {
    pub fn builder() -> ProcessorConfigBuilder {
        ProcessorConfigBuilder::default()
    }

    pub fn catalogue(&self) -> CatalogueKind {
        self.catalogue
    }

    pub fn script_split(&self) -> bool {
        self.script_split
    }

    pub fn script_trees(&self) -> bool {
        self.script_trees
    }
}

/// Fluent builder for [`ProcessorConfig`]
#[derive(Debug, Default)]
pub struct ProcessorConfigBuilder {
    config: ProcessorConfig,
}

impl ProcessorConfigBuilder {
    /// Marking convention of the corpus
    pub fn catalogue(mut self, kind: CatalogueKind) -> Self {
        self.config.catalogue = kind;
        self
    }

    /// Take each merged child's script form from splitting the merged
    /// script form, instead of converting the child on its own
    pub fn script_split(mut self, enabled: bool) -> Self {
        self.config.script_split = enabled;
        self
    }

    /// Also produce the tree with script text on its leaves
    pub fn script_trees(mut self, enabled: bool) -> Self {
        self.config.script_trees = enabled;
        self
    }

    pub fn build(self) -> ProcessorConfig {
        self.config
    }
}

/// Result of processing one tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedTree {
    pub record: TreeRecord,
    /// Tree with script leaves, when requested
    pub script_tree: Option<String>,
}

/// Shared, read-only machinery for processing trees
#[derive(Debug, Clone)]
pub struct TreeProcessor {
    transliterator: Arc<Transliterator>,
    splitter: Arc<SplitRules>,
    catalogue: Arc<MergeCatalogue>,
    config: ProcessorConfig,
}

impl TreeProcessor {
    pub fn new(
        transliterator: Arc<Transliterator>,
        splitter: Arc<SplitRules>,
        config: ProcessorConfig,
    ) -> Self {
        Self {
            transliterator,
            splitter,
            catalogue: Arc::new(MergeCatalogue::for_kind(config.catalogue)),
            config,
        }
    }

    /// Processor over the embedded tables and built-in split rules
    pub fn embedded(config: ProcessorConfig) -> Result<Self> {
        Ok(Self::new(
            Arc::new(Transliterator::embedded()?),
            Arc::new(SplitRules::builtin()?),
            config,
        ))
    }

    /// Processor over a directory of substitute tables named as the embedded
    /// ones
    pub fn from_table_dir(dir: &Path, config: ProcessorConfig) -> Result<Self> {
        let tables = LookupTables::from_dir(dir)?;
        let lexicon = read_table(dir, LEXICON_FILE)?;
        let splits = read_table(dir, SIMPLE_SPLITS_FILE)?;
        log::info!("loaded substitute tables from {}", dir.display());
        Ok(Self::new(
            Arc::new(Transliterator::new(
                Arc::new(tables),
                Box::new(Yivo::with_lexicon(&lexicon)?),
            )),
            Arc::new(SplitRules::with_simple_splits(&splits)?),
            config,
        ))
    }

    /// The same processor with script splitting switched on or off
    pub fn with_script_split(&self, enabled: bool) -> Self {
        let mut processor = self.clone();
        processor.config.script_split = enabled;
        processor
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    pub fn transliterator(&self) -> &Transliterator {
        &self.transliterator
    }

    pub fn splitter(&self) -> &SplitRules {
        &self.splitter
    }

    /// Process one tree; metadata-only trees pass through with no leaves
    pub fn process_tree(&self, tree_id: &str, tree: &str) -> Result<ProcessedTree> {
        if tree_id == NO_TREE_ID {
            return Ok(ProcessedTree {
                record: TreeRecord::metadata_only(tree),
                script_tree: self.config.script_trees.then(|| tree.to_string()),
            });
        }
        self.process_identified(tree_id, tree)
            .map_err(|error| error.in_tree(tree_id))
    }

    fn process_identified(&self, tree_id: &str, flat: &str) -> Result<ProcessedTree> {
        let mut tree = PsdTree::parse_exact(flat)?;

        let leaves: Vec<Leaf> = tree.nonempty_leaves().into_iter().cloned().collect();
        let mut leaves = self.catalogue.merge(leaves);
        for leaf in &mut leaves {
            self.script_forms(leaf)?;
        }
        let listing = LeafInfo::listing(&leaves);

        let script_tree = if self.config.script_trees {
            let mut script = tree.clone();
            reintegrate(&mut script, &listing, TextSource::Script)?;
            Some(script.serialize())
        } else {
            None
        };
        reintegrate(&mut tree, &listing, TextSource::Romanized)?;

        Ok(ProcessedTree {
            record: TreeRecord {
                tree_id: tree_id.to_string(),
                tree: tree.serialize(),
                leaves: listing,
            },
            script_tree,
        })
    }

    /// Fill in script and code for a leaf and, for a composite, its children
    fn script_forms(&self, leaf: &mut Leaf) -> Result<()> {
        leaf.yid = self.transliterator.convert(&leaf.rom, &leaf.pos);
        leaf.ycode = ycode(&leaf.yid);

        let parts = leaf.tag_arity();
        let expected = leaf.children.len().max(1);
        if parts != expected {
            return Err(CoreError::TagArity {
                pos: leaf.pos.clone(),
                rom: leaf.rom.clone(),
                parts,
                children: leaf.children.len(),
            });
        }
        if !leaf.is_composite() {
            return Ok(());
        }

        if self.config.script_split {
            let split = self
                .splitter
                .split_word(&leaf.pos, &leaf.yid)
                .ok_or_else(|| CoreError::SplitNotFound {
                    pos: leaf.pos.clone(),
                    script: leaf.yid.clone(),
                })?;
            if split.len() != leaf.children.len() {
                return Err(CoreError::SplitArity {
                    pos: leaf.pos.clone(),
                    script: leaf.yid.clone(),
                    parts: split.join(" "),
                    children: leaf
                        .children
                        .iter()
                        .map(|child| child.rom.as_str())
                        .collect::<Vec<_>>()
                        .join(" "),
                });
            }
            for (child, part) in leaf.children.iter_mut().zip(split) {
                child.ycode = ycode(&part);
                child.yid = part;
            }
        } else {
            for child in &mut leaf.children {
                child.yid = self.transliterator.convert(&child.rom, &child.pos);
                child.ycode = ycode(&child.yid);
            }
        }
        Ok(())
    }

    /// Process every `tree_id<TAB>tree` line of a prepared file, keeping
    /// input order
    pub fn process_lines(&self, content: &str) -> Result<Vec<ProcessedTree>> {
        let lines: Vec<(usize, &str)> = content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .collect();

        let process = |&(index, line): &(usize, &str)| {
            let (tree_id, tree) =
                line.split_once('\t')
                    .ok_or_else(|| CoreError::MalformedLine {
                        line: index + 1,
                        content: line.to_string(),
                    })?;
            self.process_tree(tree_id, tree)
        };

        #[cfg(feature = "parallel")]
        let processed = {
            use rayon::prelude::*;
            lines.par_iter().map(process).collect::<Result<Vec<_>>>()?
        };
        #[cfg(not(feature = "parallel"))]
        let processed = lines.iter().map(process).collect::<Result<Vec<_>>>()?;

        log::debug!("processed {} trees", processed.len());
        Ok(processed)
    }
}
