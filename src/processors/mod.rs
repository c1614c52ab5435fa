pub mod aqi_classifier;
pub mod backcast;
pub mod coverage;
pub mod enricher;
pub mod jitter;
pub mod pipeline;
pub mod pollutant_index;

pub use aqi_classifier::{classify, AqiClassifier, Breakpoint};
pub use backcast::BackcastTable;
pub use coverage::{CoverageChecker, EnrichmentReport, SkipReason, YearStatistics};
pub use enricher::{Enricher, EntryOutcome};
pub use jitter::{FixedJitter, JitterSource, UniformJitter};
pub use pipeline::EnrichmentPipeline;
pub use pollutant_index::PollutantIndex;
