/// Core types and structures for the summation benchmark
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound of the summation range
pub const DEFAULT_N: u64 = 100_000_000;

/// Header label printed before the results
pub const DEFAULT_LABEL: &str = "Rust";

/// Clock used to time the summation
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClockKind {
    /// Process CPU time (user + system), like C's clock()
    #[default]
    Cpu,
    /// Monotonic wall clock time
    Wall,
}

/// How the report is written to stdout
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Benchmark configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Upper bound of the summation
    pub n: u64,
    /// Clock used for timing
    pub clock: ClockKind,
    /// Header label
    pub label: String,
    /// Output rendering
    pub format: OutputFormat,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            n: DEFAULT_N,
            clock: ClockKind::Cpu,
            label: DEFAULT_LABEL.to_string(),
            format: OutputFormat::Text,
        }
    }
}

impl BenchConfig {
    /// Reject labels that would break the one-line header
    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(BenchError::Config("label must not be empty".to_string()));
        }
        if self.label.contains('\n') || self.label.contains('\r') {
            return Err(BenchError::Config(format!(
                "label must be a single line: {:?}",
                self.label
            )));
        }
        Ok(())
    }
}

/// Outcome of one benchmark run
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BenchReport {
    /// Header label
    pub label: String,
    /// Upper bound that was summed
    pub n: u64,
    /// Value returned by the summation loop
    pub result: u64,
    /// Elapsed time in seconds, always finite and >= 0
    pub elapsed_secs: f64,
    /// Clock the elapsed time was measured with
    pub clock: ClockKind,
    /// When the run started
    pub started_at: DateTime<Utc>,
}

/// Custom error types for the benchmark
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Clock error: {0}")]
    Clock(#[from] nix::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for benchmark operations
pub type Result<T> = std::result::Result<T, BenchError>;
