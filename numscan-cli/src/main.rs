//! numscan CLI - sums the per-line two-digit values of a text file.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::debug;

/// Sum the two-digit number formed by the first and last digit (or
/// spelled-out digit word) of every line in a text file.
#[derive(Parser, Debug)]
#[command(name = "numscan")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input file to scan
    #[arg(default_value = "input.txt")]
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    debug!("scanning {}", cli.input.display());
    let file = File::open(&cli.input)
        .with_context(|| format!("failed to open {}", cli.input.display()))?;
    let total = numscan::sum_reader(BufReader::new(file))
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    println!("{total}");
    Ok(())
}
