//! Leaf processing for PPCHY-style Yiddish treebanks
//!
//! The treebank splits written words into several tokens, each a terminal of
//! the tree, and marks the split with `@`. This crate rebuilds the written
//! words, converts every token from YIVO romanization to Yiddish script, and
//! lists both views of the leaves alongside the tree.
//!
//! # Architecture
//!
//! - **Tables and conversion**: [`tables`], [`translit`] and [`split_word`]
//!   hold the read-only lookup tables, the romanization-to-script converter
//!   and the rules that split a merged script form back into its tokens.
//! - **Leaves and trees**: [`leaf`], [`tree`] and [`merge`] parse terminals,
//!   classify split marks and merge split tokens.
//! - **Pipeline**: [`pipeline`] ties these together per tree, producing
//!   [`record`]s and writing leaf text back via [`reintegrate`].
//! - **Preparation**: [`prep`] turns raw `.psd` files into one tree per line.
//!
//! # Example
//!
//! ```rust
//! use treeyid_core::{ProcessorConfig, TreeProcessor};
//!
//! let processor = TreeProcessor::embedded(ProcessorConfig::default()).unwrap();
//! assert_eq!(processor.transliterator().convert("kol", "N"), "קול");
//!
//! let processed = processor
//!     .process_tree("A,1.1", "(IP-MAT (PP (P oyf@) (D @n)) (E_S .))")
//!     .unwrap();
//! assert_eq!(processed.record.leaves[0].pos, "P~D");
//! ```

pub mod error;
pub mod leaf;
pub mod merge;
pub mod pipeline;
pub mod prep;
pub mod record;
pub mod reintegrate;
pub mod split_word;
pub mod tables;
pub mod translit;
pub mod tree;

pub use error::{CoreError, Result};
pub use leaf::{Leaf, SplitMark};
pub use merge::{CatalogueKind, MergeCatalogue};
pub use pipeline::{ProcessedTree, ProcessorConfig, ProcessorConfigBuilder, TreeProcessor};
pub use prep::{prepare_file, prepare_tree, read_psd, ConvStatus, CorpusMods, MetaHandling, PrepOptions};
pub use record::{LeafInfo, LeafType, TreeRecord, NO_TREE_ID};
pub use reintegrate::{reintegrate, TextSource};
pub use split_word::{split_word, SplitRules};
pub use tables::LookupTables;
pub use translit::{ycode, Transliterator, Yivo};
pub use tree::PsdTree;
