/// sumbench: loop-summation micro-benchmark
///
/// Sums the integers 1..=100000000 with a plain loop and prints the result
/// with the elapsed time, in the same format as the C and Python versions
/// of the benchmark.
///
/// # Usage
/// ```bash
/// sumbench
/// sumbench --clock wall --format json
/// RUST_LOG=debug sumbench
/// ```
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use sumbench::cli::Cli;

fn main() -> Result<()> {
    // Diagnostics go to stderr, the report to stdout
    env_logger::init();

    let config = Cli::parse().into_config();
    log::info!("Running summation benchmark: {:?}", config);

    let report = sumbench::bench::run(&config).context("Benchmark run failed")?;
    let output = sumbench::report::render(&report, config.format)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
