mod commands;
mod demos;
mod logging;

use clap::Parser;
use eyre::Result;

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.verbose);
    cli.run()
}
