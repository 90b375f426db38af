use crate::benchmarks::DEFAULT_NUMBER_OF_TYPE_PAIRS;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "di_bench")]
#[command(about = "A tool for benchmarking dependency injection container implementations")]
#[command(version)]
pub struct Cli {
    /// Container implementation to benchmark (case-insensitive): hashmap | btreemap
    pub container: String,

    /// Number of interface/implementation type pairs to generate
    #[arg(short, long, default_value_t = DEFAULT_NUMBER_OF_TYPE_PAIRS)]
    pub count: usize,

    /// Output file path for a JSON benchmark report
    #[arg(short, long)]
    pub report: Option<PathBuf>,
}
