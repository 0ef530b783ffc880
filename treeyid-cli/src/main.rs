use clap::Parser;
use treeyid_cli::commands::{Commands, CommonArgs};
use treeyid_cli::CliResult;

#[derive(Debug, Parser)]
#[command(
    name = "treeyid",
    version,
    about = "Prepare PPCHY treebank files and convert their leaves to Yiddish script"
)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.common.init_logging();
    cli.command.execute(&cli.common)
}
