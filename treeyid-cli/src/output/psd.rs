//! Flat tree output, one wrapped tree per line

use super::OutputWriter;
use crate::error::CliError;
use anyhow::Result;
use std::io::Write;
use treeyid_core::ProcessedTree;

/// Which text the tree leaves carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeForm {
    Romanized,
    Script,
}

pub struct PsdWriter<W: Write> {
    writer: W,
    form: TreeForm,
}

impl<W: Write> PsdWriter<W> {
    pub fn new(writer: W, form: TreeForm) -> Self {
        Self { writer, form }
    }
}

/// `( <tree>(ID <id>))`, or `( <tree>)` for metadata-only trees
pub fn wrap_tree(tree_id: &str, tree: &str, metadata_only: bool) -> String {
    if metadata_only {
        format!("( {tree})")
    } else {
        format!("( {tree}(ID {tree_id}))")
    }
}

impl<W: Write + Send> OutputWriter for PsdWriter<W> {
    fn write_tree(&mut self, tree: &ProcessedTree) -> Result<()> {
        let record = &tree.record;
        let text = match self.form {
            TreeForm::Romanized => record.tree.as_str(),
            TreeForm::Script => tree.script_tree.as_deref().ok_or_else(|| {
                CliError::ProcessingError(format!("no script tree for {}", record.tree_id))
            })?,
        };
        writeln!(
            self.writer,
            "{}",
            wrap_tree(&record.tree_id, text, record.is_metadata_only())
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
