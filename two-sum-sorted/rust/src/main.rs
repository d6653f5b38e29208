use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use two_sum_sorted::{cli::Args, two_sum};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    debug!(sum = args.target, len = args.numbers.len(), "parsed input");

    let [left, right] = two_sum(&args.numbers, args.target);
    info!(left, right, found = left != -1, "scan done");

    println!("{left} {right}");
    Ok(())
}
