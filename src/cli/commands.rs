use crate::cli::args::{Cli, Commands};
use crate::error::{ProcessingError, Result};
use crate::processors::aqi_classifier::breakpoints_for;
use crate::processors::{AqiClassifier, CoverageChecker, EnrichmentPipeline, FixedJitter};
use crate::readers::DatasetReader;
use crate::settings::{Settings, SettingsOverrides};
use crate::utils::progress::ProgressReporter;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Enrich {
            temperatures,
            pollutants,
            output,
            seed,
            no_jitter,
            strict,
            dry_run,
            quiet,
        } => {
            let mut settings = Settings::load(cli.config.as_deref())?;
            settings.apply_overrides(SettingsOverrides {
                temperature_path: temperatures,
                pollutant_path: pollutants,
                output_path: output,
                seed,
                strict,
            });

            println!("Enriching temperature data...");
            println!("Temperatures: {}", settings.temperature_path.display());
            println!("Pollutants: {}", settings.pollutant_path.display());
            println!("Output file: {}", settings.output_path.display());

            let output_path = settings.output_path.clone();
            let pipeline = EnrichmentPipeline::new(settings).with_dry_run(dry_run);
            let progress = ProgressReporter::new_spinner("Enriching entries...", quiet);

            let report = if no_jitter {
                pipeline.run(&mut FixedJitter(1.0), Some(&progress))?
            } else {
                let mut jitter = pipeline.jitter_source()?;
                pipeline.run(&mut jitter, Some(&progress))?
            };

            progress.finish_with_message(&format!(
                "Enriched {} of {} entries",
                report.enriched_entries, report.total_entries
            ));

            println!("\n{}", CoverageChecker::new().generate_summary(&report));

            if dry_run {
                println!("Dry run complete - no output file written");
            } else {
                println!("Saved: {}", output_path.display());
            }
        }

        Commands::Info { file, sample } => {
            println!("Analyzing dataset: {}", file.display());

            let dataset = DatasetReader::new().read_dataset(&file)?;
            let checker = CoverageChecker::new();
            let report = checker.check(&dataset);

            println!("\n{}", checker.generate_summary(&report));

            if sample > 0 {
                println!("Sample Entries (showing up to {}):", sample);
                let enriched = dataset
                    .entries()
                    .filter_map(|(year, entry)| Some((year, entry, entry.aqi()?, entry.pollutants()?)));
                for (i, (year, entry, aqi, reading)) in enriched.take(sample).enumerate() {
                    println!(
                        "{}. {} in {}: AQI {} (PM2.5 {:.1}, PM10 {:.1}, NO2 {:.1}, SO2 {:.1}, O3 {:.1}, CO {:.0})",
                        i + 1,
                        entry.name,
                        year,
                        aqi,
                        reading.pm25,
                        reading.pm10,
                        reading.no2,
                        reading.so2,
                        reading.o3,
                        reading.co
                    );
                }
            }
        }

        Commands::Classify { pollutant, value } => {
            let sub_index = AqiClassifier::new().sub_index(pollutant, value);
            let breakpoint = breakpoints_for(pollutant)[usize::from(sub_index) - 1];

            let range = match breakpoint.high {
                Some(high) => format!("{}-{}", breakpoint.low, high),
                None => format!(">= {}", breakpoint.low),
            };

            if breakpoint.contains(value) {
                println!("{} {} -> AQI sub-index {} ({})", pollutant, value, sub_index, range);
            } else {
                println!(
                    "{} {} is outside every range -> AQI sub-index {}",
                    pollutant, value, sub_index
                );
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let installed = match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    installed.map_err(|e| ProcessingError::Config(format!("Failed to initialise logging: {}", e)))
}
