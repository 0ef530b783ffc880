//! Convert command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use treeyid_core::{ycode, TreeProcessor};

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Romanized token
    pub rom: String,

    /// Part-of-speech tag, which selects table overrides
    pub pos: String,
}

impl ConvertArgs {
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let processor = config.processor()?;
        println!("{}", self.render(&processor));
        Ok(())
    }

    /// `script<TAB>ycode`
    fn render(&self, processor: &TreeProcessor) -> String {
        let script = processor.transliterator().convert(&self.rom, &self.pos);
        let code = ycode(&script);
        format!("{script}\t{code}")
    }
}
