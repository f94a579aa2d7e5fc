//! CLI entry point for the sorting algorithm visualizer

use clap::Parser;
use sortviz::io::cli::{Cli, SessionRunner};

fn main() -> sortviz::Result<()> {
    let cli = Cli::parse();
    let runner = SessionRunner::new(cli);
    runner.run().map(|_| ())
}
