use crate::error::{ProcessingError, Result};
use crate::models::{Enrichment, PollutantReading, TemperatureDataset};
use crate::processors::aqi_classifier::AqiClassifier;
use crate::processors::backcast::BackcastTable;
use crate::processors::coverage::{EnrichmentReport, SkipReason};
use crate::processors::jitter::JitterSource;
use crate::processors::pollutant_index::PollutantIndex;
use crate::utils::constants::BASELINE_YEAR;
use crate::utils::progress::ProgressReporter;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryOutcome {
    Enriched(Enrichment),
    Skipped(SkipReason),
}

pub struct Enricher {
    classifier: AqiClassifier,
    backcast: BackcastTable,
    strict: bool,
}

impl Enricher {
    pub fn new() -> Self {
        Self {
            classifier: AqiClassifier::new(),
            backcast: BackcastTable::new(),
            strict: false,
        }
    }

    /// In strict mode every pre-baseline year in the dataset must have a backcast multiplier
    pub fn with_strict(strict: bool) -> Self {
        Self {
            strict,
            ..Self::new()
        }
    }

    /// Estimate pollutants and AQI for one district in one year.
    ///
    /// Jitter is drawn only when the join succeeds.
    pub fn estimate<J: JitterSource + ?Sized>(
        &self,
        district: &str,
        year: i32,
        index: &PollutantIndex,
        jitter: &mut J,
    ) -> EntryOutcome {
        let Some(baseline) = index.baseline(district) else {
            return EntryOutcome::Skipped(SkipReason::NoBaseline);
        };

        let (source, factor) = if year >= BASELINE_YEAR {
            match index.get(district, year) {
                Some(row) => (row, 1.0),
                None => return EntryOutcome::Skipped(SkipReason::NoYearRow),
            }
        } else {
            match self.backcast.multiplier(year) {
                Some(factor) => (baseline, factor),
                None => return EntryOutcome::Skipped(SkipReason::NoBackcastMultiplier),
            }
        };

        let pollutants = PollutantReading::from_row(source, factor, jitter.draw());
        let aqi = self.classifier.overall(&pollutants);

        EntryOutcome::Enriched(Enrichment { pollutants, aqi })
    }

    /// Produce an enriched copy of `dataset`; the input is left untouched.
    pub fn enrich<J: JitterSource + ?Sized>(
        &self,
        dataset: &TemperatureDataset,
        index: &PollutantIndex,
        jitter: &mut J,
        progress: Option<&ProgressReporter>,
    ) -> Result<(TemperatureDataset, EnrichmentReport)> {
        if self.strict {
            let uncovered = self.backcast.uncovered_years(dataset.distinct_years());
            if !uncovered.is_empty() {
                return Err(ProcessingError::MissingData(format!(
                    "No backcast multiplier for years {:?}",
                    uncovered
                )));
            }
        }

        let mut enriched = dataset.clone();
        let mut report = EnrichmentReport::new();

        for slice in enriched.years.iter_mut() {
            if let Some(p) = progress {
                p.set_message(&format!("Enriching {}...", slice.key));
            }

            for entry in slice.districts.iter_mut() {
                match self.estimate(&entry.name, slice.year, index, jitter) {
                    EntryOutcome::Enriched(enrichment) => {
                        entry.apply(&enrichment)?;
                        report.record_enriched(slice.year, enrichment.aqi);
                    }
                    EntryOutcome::Skipped(reason) => {
                        debug!("Skipping '{}' in {}: {}", entry.name, slice.year, reason);
                        report.record_skipped(slice.year, reason);
                    }
                }

                if let Some(p) = progress {
                    p.increment(1);
                }
            }
        }

        info!(
            "Enriched {} of {} entries",
            report.enriched_entries, report.total_entries
        );

        Ok((enriched, report))
    }
}

impl Default for Enricher {
    fn default() -> Self {
        Self::new()
    }
}
