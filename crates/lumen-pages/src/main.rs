mod cli;
mod pages;

use anyhow::Result;
use clap::Parser;
use lumen_engine::logging::init_logging;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.logging_config());

    log::info!("opening page {:?}", cli.page);
    pages::run(&cli)
}
