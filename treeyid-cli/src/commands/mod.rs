//! CLI command implementations

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::path::PathBuf;

pub mod convert;
pub mod generate_config;
pub mod prep;
pub mod process;
pub mod split;

/// Flags shared by every command
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Suppress logging and progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }

    pub fn load_config(&self) -> Result<CliConfig> {
        CliConfig::load(self.config.as_deref())
    }
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Turn raw .psd files into one tree per line
    Prep(prep::PrepArgs),

    /// Merge, convert and list the leaves of prepared files
    Process(process::ProcessArgs),

    /// Print the script and phonetic-code forms of a romanized token
    Convert(convert::ConvertArgs),

    /// Split a merged script word into its parts
    Split(split::SplitArgs),

    /// Write the default configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    pub fn execute(&self, common: &CommonArgs) -> Result<()> {
        if let Commands::GenerateConfig(args) = self {
            return args.execute();
        }

        let config = common.load_config()?;
        match self {
            Commands::Prep(args) => args.execute(&config, common.quiet),
            Commands::Process(args) => args.execute(&config, common.quiet),
            Commands::Convert(args) => args.execute(&config),
            Commands::Split(args) => args.execute(&config),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Pool for file-level parallelism, sized by the configuration
pub(crate) fn worker_pool(config: &CliConfig) -> Result<rayon::ThreadPool> {
    let threads = config.worker_threads();
    log::debug!("using {threads} worker threads");
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("treeyid-worker-{i}"))
        .build()
        .context("Failed to create thread pool")
}
