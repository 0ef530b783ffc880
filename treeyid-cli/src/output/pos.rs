//! Tab-separated listing of tree tokens

use super::OutputWriter;
use anyhow::Result;
use std::io::Write;
use treeyid_core::ProcessedTree;

/// `position, rom, pos, yid, ycode, gloss` per tree token, a blank line
/// between trees
pub struct PosWriter<W: Write> {
    writer: W,
    trees_written: usize,
}

impl<W: Write> PosWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            trees_written: 0,
        }
    }
}

impl<W: Write + Send> OutputWriter for PosWriter<W> {
    fn write_tree(&mut self, tree: &ProcessedTree) -> Result<()> {
        if tree.record.is_metadata_only() {
            return Ok(());
        }
        if self.trees_written > 0 {
            writeln!(self.writer)?;
        }
        for info in tree.record.tree_tokens() {
            writeln!(
                self.writer,
                "{}\t{}\t{}\t{}\t{}\t{}",
                info.start,
                info.rom,
                info.pos,
                info.yid,
                info.ycode,
                info.gloss.as_deref().unwrap_or("")
            )?;
        }
        self.trees_written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::write_all;
    use treeyid_core::{ProcessorConfig, TreeProcessor};

    #[test]
    fn test_tree_tokens_only() {
        let trees = TreeProcessor::embedded(ProcessorConfig::default())
            .unwrap()
            .process_lines(
                "A,1\t(IP-MAT (N kol^voice))\nnotreeid\t(CODE <P_1>)\nA,2\t(IP-MAT (PP (P oyf@) (D @n)))\n",
            )
            .unwrap();

        let mut buffer = Vec::new();
        write_all(&mut PosWriter::new(&mut buffer), &trees).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "0\tkol\tN\tקול\tqul\tvoice\n\n0\toyf\tP\tאױף\t{}\t\n1\tn\tD\tן\t{}\t\n"
                .replacen("{}", &treeyid_core::ycode("אױף"), 1)
                .replacen("{}", &treeyid_core::ycode("ן"), 1)
        );
    }
}
