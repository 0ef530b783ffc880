//! Split command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use treeyid_core::SplitRules;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Merged tag, e.g. P~D
    pub pos: String,

    /// Merged word in Yiddish script
    pub script: String,
}

impl SplitArgs {
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let processor = config.processor()?;
        println!("{}", self.render(processor.splitter())?);
        Ok(())
    }

    /// The parts separated by spaces
    fn render(&self, rules: &SplitRules) -> Result<String> {
        let parts = rules.split_word(&self.pos, &self.script).ok_or_else(|| {
            CliError::ProcessingError(format!(
                "no split rule for {} matched {}",
                self.pos, self.script
            ))
        })?;
        Ok(parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pos: &str, script: &str) -> SplitArgs {
        SplitArgs {
            pos: pos.to_string(),
            script: script.to_string(),
        }
    }

    #[test]
    fn test_render_parts() {
        let rules = SplitRules::builtin().unwrap();
        assert_eq!(args("P~D", "אױפֿן").render(&rules).unwrap(), "אױפֿ ן");
    }

    #[test]
    fn test_not_found() {
        let rules = SplitRules::builtin().unwrap();
        let error = args("N~N", "קינד").render(&rules).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Processing error: no split rule for N~N matched קינד"
        );
    }
}
