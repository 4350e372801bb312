use bks::Cli;
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    bks::run(cli)?;

    Ok(())
}
