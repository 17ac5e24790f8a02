mod cli;
mod converter;
mod file_reader;
mod logging;
mod normalizer;
mod reader;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    logging::init();
    converter::convert(&cli)
}
