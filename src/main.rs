use anyhow::Result;
use clap::Parser;
use modnuke::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
