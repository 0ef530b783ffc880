//! JSON output writer

use super::OutputWriter;
use anyhow::Result;
use std::io::Write;
use treeyid_core::{ProcessedTree, TreeRecord};

/// Writes the records of one file as a JSON array
pub struct JsonWriter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<TreeRecord>,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send> OutputWriter for JsonWriter<W> {
    fn write_tree(&mut self, tree: &ProcessedTree) -> Result<()> {
        self.records.push(tree.record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
