use crate::models::TemperatureDataset;
use std::collections::BTreeMap;
use std::fmt;

/// Why an entry was left without pollutant estimates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkipReason {
    NoBaseline,
    NoYearRow,
    NoBackcastMultiplier,
}

impl SkipReason {
    pub fn description(&self) -> &'static str {
        match self {
            SkipReason::NoBaseline => "no baseline row for the area",
            SkipReason::NoYearRow => "no pollutant row for the year",
            SkipReason::NoBackcastMultiplier => "no backcast multiplier for the year",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct YearStatistics {
    pub total_entries: usize,
    pub enriched_entries: usize,
    pub max_aqi: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichmentReport {
    pub total_entries: usize,
    pub enriched_entries: usize,
    pub skipped: BTreeMap<SkipReason, usize>,
    pub aqi_distribution: BTreeMap<u8, usize>,
    pub year_statistics: BTreeMap<i32, YearStatistics>,
}

impl EnrichmentReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_enriched(&mut self, year: i32, aqi: u8) {
        self.total_entries += 1;
        self.enriched_entries += 1;
        *self.aqi_distribution.entry(aqi).or_default() += 1;

        let stats = self.year_statistics.entry(year).or_default();
        stats.total_entries += 1;
        stats.enriched_entries += 1;
        stats.max_aqi = Some(stats.max_aqi.map_or(aqi, |m| m.max(aqi)));
    }

    pub fn record_skipped(&mut self, year: i32, reason: SkipReason) {
        *self.skipped.entry(reason).or_default() += 1;
        self.record_unenriched(year);
    }

    /// Count an entry without estimates when the reason is unknown
    pub fn record_unenriched(&mut self, year: i32) {
        self.total_entries += 1;
        self.year_statistics.entry(year).or_default().total_entries += 1;
    }

    pub fn unenriched_entries(&self) -> usize {
        self.total_entries - self.enriched_entries
    }

    pub fn skipped_for(&self, reason: SkipReason) -> usize {
        self.skipped.get(&reason).copied().unwrap_or(0)
    }

    pub fn coverage_percent(&self) -> f64 {
        if self.total_entries == 0 {
            return 0.0;
        }
        100.0 * self.enriched_entries as f64 / self.total_entries as f64
    }
}

pub struct CoverageChecker;

impl CoverageChecker {
    pub fn new() -> Self {
        Self
    }

    /// Build a report from the `aqi`/`pollutants` fields already present in a dataset
    pub fn check(&self, dataset: &TemperatureDataset) -> EnrichmentReport {
        let mut report = EnrichmentReport::new();

        for (year, entry) in dataset.entries() {
            match entry.aqi() {
                Some(aqi) if entry.is_enriched() => report.record_enriched(year, aqi),
                _ => report.record_unenriched(year),
            }
        }

        report
    }

    pub fn generate_summary(&self, report: &EnrichmentReport) -> String {
        let mut summary = String::new();

        summary.push_str("=== Enrichment Report ===\n");
        summary.push_str(&format!("Total Entries: {}\n", report.total_entries));
        summary.push_str(&format!(
            "Enriched Entries: {} ({:.1}%)\n",
            report.enriched_entries,
            report.coverage_percent()
        ));
        summary.push_str(&format!(
            "Unenriched Entries: {}\n",
            report.unenriched_entries()
        ));

        if !report.skipped.is_empty() {
            summary.push_str("\nSkipped Entries:\n");
            for (reason, count) in &report.skipped {
                summary.push_str(&format!("  {}: {}\n", reason, count));
            }
        }

        if !report.aqi_distribution.is_empty() {
            summary.push_str("\nAQI Distribution:\n");
            for (aqi, count) in &report.aqi_distribution {
                summary.push_str(&format!("  AQI {}: {}\n", aqi, count));
            }
        }

        if !report.year_statistics.is_empty() {
            summary.push_str("\nPer Year:\n");
            for (year, stats) in &report.year_statistics {
                let max_aqi = stats
                    .max_aqi
                    .map(|a| a.to_string())
                    .unwrap_or_else(|| "-".to_string());
                summary.push_str(&format!(
                    "  {}: {}/{} enriched, max AQI {}\n",
                    year, stats.enriched_entries, stats.total_entries, max_aqi
                ));
            }
        }

        summary
    }
}

impl Default for CoverageChecker {
    fn default() -> Self {
        Self::new()
    }
}
