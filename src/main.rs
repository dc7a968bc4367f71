//! CLI entry point for the TMX maze generation tool

use clap::Parser;
use mazetiler::io::cli::{BatchRunner, Cli};

fn main() -> mazetiler::Result<()> {
    let cli = Cli::parse();
    let mut runner = BatchRunner::new(cli);
    runner.run()
}
