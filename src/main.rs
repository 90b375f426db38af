use anyhow::Result;
use clap::Parser;
use di_bench::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::run(&cli)
}
