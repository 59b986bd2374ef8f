//! Terminal entry point for the sliding-tile merge puzzle

use clap::Parser;
use tilefold::io::cli::{Cli, GameRunner};

fn main() -> tilefold::Result<()> {
    let cli = Cli::parse();
    let mut runner = GameRunner::new(cli)?;
    runner.run()
}
