use crate::error::Result;
use crate::processors::coverage::EnrichmentReport;
use crate::processors::enricher::Enricher;
use crate::processors::jitter::{JitterSource, UniformJitter};
use crate::processors::pollutant_index::PollutantIndex;
use crate::readers::{DatasetReader, PollutantReader};
use crate::settings::Settings;
use crate::utils::progress::ProgressReporter;
use crate::writers::JsonWriter;
use rand::rngs::StdRng;
use tracing::info;

/// Load both inputs, enrich, and write the output.
pub struct EnrichmentPipeline {
    settings: Settings,
    dry_run: bool,
}

impl EnrichmentPipeline {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Uniform jitter from the configured bounds, seeded when a seed is configured
    pub fn jitter_source(&self) -> Result<UniformJitter<StdRng>> {
        let (low, high) = (self.settings.jitter_min, self.settings.jitter_max);
        match self.settings.seed {
            Some(seed) => UniformJitter::seeded(seed, low, high),
            None => UniformJitter::from_entropy(low, high),
        }
    }

    pub fn run<J: JitterSource + ?Sized>(
        &self,
        jitter: &mut J,
        progress: Option<&ProgressReporter>,
    ) -> Result<EnrichmentReport> {
        // Both inputs are read before anything is written
        let dataset = DatasetReader::new().read_dataset(&self.settings.temperature_path)?;
        let rows = PollutantReader::with_strict_validation(self.settings.strict)
            .read_rows(&self.settings.pollutant_path)?;
        let index = PollutantIndex::from_rows(rows);

        info!(
            "Loaded {} entries and {} pollutant rows",
            dataset.entry_count(),
            index.len()
        );

        let enricher = Enricher::with_strict(self.settings.strict);
        let (enriched, report) = enricher.enrich(&dataset, &index, jitter, progress)?;

        if self.dry_run {
            info!("Dry run: not writing {}", self.settings.output_path.display());
        } else {
            JsonWriter::new().write_dataset(&enriched, &self.settings.output_path)?;
            info!("Saved: {}", self.settings.output_path.display());
        }

        Ok(report)
    }
}
