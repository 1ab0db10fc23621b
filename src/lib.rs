//! sumbench: a loop-summation micro-benchmark
//! Sums 1..=100000000 one addition at a time and reports the elapsed CPU or wall time

pub mod bench;
pub mod cli;
pub mod clock;
pub mod report;
pub mod summation;
pub mod types;
