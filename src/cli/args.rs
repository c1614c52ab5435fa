use crate::models::Pollutant;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aqi-enricher")]
#[command(about = "Enrich area temperature datasets with synthetic air-quality estimates")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Configuration file [default: ./aqi-enricher.{toml,json,yaml} if present]"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Attach pollutant estimates and AQI buckets to a temperature dataset
    Enrich {
        #[arg(short, long, help = "Temperature dataset (JSON, year -> district -> record)")]
        temperatures: Option<PathBuf>,

        #[arg(short, long, help = "Historical pollutant table (CSV)")]
        pollutants: Option<PathBuf>,

        #[arg(short, long, help = "Output JSON file path")]
        output: Option<PathBuf>,

        #[arg(short, long, help = "Seed for reproducible jitter")]
        seed: Option<u64>,

        #[arg(long, help = "Disable jitter (factor fixed at 1.0)")]
        no_jitter: bool,

        #[arg(long, help = "Reject invalid pollutant rows and uncovered backcast years")]
        strict: bool,

        #[arg(long, help = "Compute and report without writing output")]
        dry_run: bool,

        #[arg(short, long, help = "Hide the progress spinner")]
        quiet: bool,
    },

    /// Summarize AQI coverage of a dataset
    Info {
        #[arg(short, long)]
        file: PathBuf,

        #[arg(short, long, default_value = "5")]
        sample: usize,
    },

    /// Classify a single concentration
    Classify {
        #[arg(short, long, help = "Pollutant code: pm25, pm10, no2, so2, o3, co")]
        pollutant: Pollutant,

        #[arg(long, allow_negative_numbers = true)]
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_enrich() {
        let cli = Cli::parse_from([
            "aqi-enricher",
            "--verbose",
            "enrich",
            "--output",
            "out.json",
            "--seed",
            "42",
            "--dry-run",
        ]);

        assert!(cli.verbose);
        match cli.command {
            Commands::Enrich {
                output,
                seed,
                dry_run,
                no_jitter,
                ..
            } => {
                assert_eq!(output, Some(PathBuf::from("out.json")));
                assert_eq!(seed, Some(42));
                assert!(dry_run);
                assert!(!no_jitter);
            }
            _ => panic!("expected enrich"),
        }
    }

    #[test]
    fn test_parse_classify() {
        let cli = Cli::parse_from(["aqi-enricher", "classify", "-p", "PM2.5", "--value", "-3"]);

        match cli.command {
            Commands::Classify { pollutant, value } => {
                assert_eq!(pollutant, Pollutant::Pm25);
                assert_eq!(value, -3.0);
            }
            _ => panic!("expected classify"),
        }
    }

    #[test]
    fn test_unknown_pollutant_is_rejected() {
        let result = Cli::try_parse_from(["aqi-enricher", "classify", "-p", "nh3", "--value", "1"]);
        assert!(result.is_err());
    }
}
