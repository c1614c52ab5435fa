pub mod dataset;
pub mod pollutant;
pub mod pollutant_row;

pub use dataset::{DistrictEntry, TemperatureDataset, YearSlice};
pub use pollutant::{Enrichment, Pollutant, PollutantReading};
pub use pollutant_row::PollutantRow;
