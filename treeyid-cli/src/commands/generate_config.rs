//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

const HEADER: &str = "\
# treeyid configuration
#
# catalogue: \"flags\" reads split marks into flags, \"inline\" keeps them in the text
# meta: \"delete\" removes CODE/METADATA/REF subtrees, \"keep-empty\" keeps CODE as (CODE (-NONE- x))
# worker_threads: 0 uses one thread per CPU

";

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = generate_template()?;
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file to match your corpus");
        println!("2. Prepare the raw trees:");
        println!(
            "   treeyid prep -c {} -i 'psd/*.psd' -o prepared",
            self.output.display()
        );
        println!("3. Process them:");
        println!(
            "   treeyid process -c {} -i 'prepared/*.txt' -o out",
            self.output.display()
        );

        Ok(())
    }
}

/// The default configuration with explanatory comments
pub fn generate_template() -> Result<String> {
    Ok(format!("{HEADER}{}", CliConfig::default().to_toml()?))
}
