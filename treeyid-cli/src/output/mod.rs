//! Output writers for processed trees
//!
//! Each processed input file gets one file per writer, named after the
//! input's stem: `json/<stem>.json`, `psd/<stem>.psd` and `pos/<stem>.txt`.

use anyhow::Result;
use treeyid_core::ProcessedTree;

/// Trait for output writers
pub trait OutputWriter: Send {
    /// Write one processed tree
    fn write_tree(&mut self, tree: &ProcessedTree) -> Result<()>;

    /// Finalize output (e.g., write the collected JSON records)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod pos;
pub mod psd;

pub use json::JsonWriter;
pub use pos::PosWriter;
pub use psd::{PsdWriter, TreeForm};

/// Run every tree through a writer and finish it
pub fn write_all(writer: &mut dyn OutputWriter, trees: &[ProcessedTree]) -> Result<()> {
    for tree in trees {
        writer.write_tree(tree)?;
    }
    writer.finish()
}
