/// Command Line Interface for the summation benchmark
use crate::types::{BenchConfig, ClockKind, OutputFormat, DEFAULT_LABEL};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "sumbench")]
#[command(author, version, about = "Times a loop summing 1..=100000000", long_about = None)]
pub struct Cli {
    /// Clock used to time the summation
    #[arg(long, value_enum, default_value_t = ClockKind::Cpu)]
    pub clock: ClockKind,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Label printed on the header line
    #[arg(long, default_value = DEFAULT_LABEL)]
    pub label: String,
}

impl Cli {
    /// Build the benchmark configuration; the bound is always the default
    pub fn into_config(self) -> BenchConfig {
        BenchConfig {
            clock: self.clock,
            format: self.format,
            label: self.label,
            ..BenchConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_N;

    #[test]
    fn test_no_arguments_gives_default_config() {
        let config = Cli::try_parse_from(["sumbench"]).unwrap().into_config();
        assert_eq!(config.n, DEFAULT_N);
        assert_eq!(config.clock, ClockKind::Cpu);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.label, "Rust");
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "sumbench", "--clock", "wall", "--format", "json", "--label", "Rust (release)",
        ])
        .unwrap();
        let config = cli.into_config();
        assert_eq!(config.clock, ClockKind::Wall);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.label, "Rust (release)");
        assert_eq!(config.n, DEFAULT_N);
    }

    #[test]
    fn test_unknown_clock_is_rejected() {
        assert!(Cli::try_parse_from(["sumbench", "--clock", "gpu"]).is_err());
    }

    #[test]
    fn test_bound_is_not_a_flag() {
        assert!(Cli::try_parse_from(["sumbench", "--n", "10"]).is_err());
    }
}
