//! CLI entry point for the layered edition generator

use clap::Parser;
use layerforge::io::cli::{Cli, EditionProcessor};
use tracing::Level;

fn main() -> layerforge::Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet { Level::WARN } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut processor = EditionProcessor::new(cli);
    processor.process()?;
    Ok(())
}
