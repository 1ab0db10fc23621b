/// Benchmark driver: time one summation run and build the report
use crate::clock::Clock;
use crate::summation::{closed_form, sum_to_n};
use crate::types::{BenchConfig, BenchReport, Result};
use chrono::Utc;

/// Run the summation once under the configured clock
pub fn run(config: &BenchConfig) -> Result<BenchReport> {
    config.validate()?;

    let clock = Clock::new(config.clock);
    log::debug!("Summing 1..={} timed with {:?} clock", config.n, clock.kind());

    let started_at = Utc::now();
    let start = clock.sample()?;
    let result = sum_to_n(config.n);
    let end = clock.sample()?;

    let elapsed = end.since(start);
    log::debug!("Summation finished in {:?}", elapsed);

    let expected = closed_form(config.n);
    if result as u128 != expected {
        log::warn!(
            "Accumulator wrapped: loop gave {}, closed form is {}",
            result,
            expected
        );
    }

    Ok(BenchReport {
        label: config.label.clone(),
        n: config.n,
        result,
        elapsed_secs: elapsed.as_secs_f64(),
        clock: config.clock,
        started_at,
    })
}
