use crate::error::Result;
use crate::models::TemperatureDataset;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

pub struct DatasetReader;

impl DatasetReader {
    pub fn new() -> Self {
        Self
    }

    /// Read a year -> district -> record JSON document
    pub fn read_dataset(&self, path: &Path) -> Result<TemperatureDataset> {
        let file = File::open(path)?;
        let dataset = self.read_dataset_from(BufReader::new(file))?;
        debug!(
            "Read {} entries across {} years from {}",
            dataset.entry_count(),
            dataset.years.len(),
            path.display()
        );
        Ok(dataset)
    }

    pub fn read_dataset_from<R: Read>(&self, source: R) -> Result<TemperatureDataset> {
        let value: Value = serde_json::from_reader(source)?;
        TemperatureDataset::from_value(value)
    }
}

impl Default for DatasetReader {
    fn default() -> Self {
        Self::new()
    }
}
