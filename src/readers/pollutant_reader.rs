use crate::error::{ProcessingError, Result};
use crate::models::PollutantRow;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};
use validator::Validate;

pub struct PollutantReader {
    strict_validation: bool,
}

impl PollutantReader {
    pub fn new() -> Self {
        Self {
            strict_validation: false,
        }
    }

    pub fn with_strict_validation(strict_validation: bool) -> Self {
        Self { strict_validation }
    }

    /// Read pollutant rows from a CSV file with a header line
    pub fn read_rows(&self, path: &Path) -> Result<Vec<PollutantRow>> {
        let file = File::open(path)?;
        let rows = self.read_rows_from(file)?;
        debug!("Read {} pollutant rows from {}", rows.len(), path.display());
        Ok(rows)
    }

    /// Read pollutant rows from any CSV source. Columns beyond the required ones are ignored.
    pub fn read_rows_from<R: Read>(&self, source: R) -> Result<Vec<PollutantRow>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(source);

        let mut rows = Vec::new();
        for result in reader.deserialize::<PollutantRow>() {
            let row = result?;

            if let Err(errors) = row.validate() {
                if self.strict_validation {
                    return Err(errors.into());
                }
                warn!(
                    "Pollutant row for '{}' ({}) failed validation: {}",
                    row.area, row.year, errors
                );
            }

            if !row.has_finite_concentrations() {
                return Err(ProcessingError::InvalidFormat(format!(
                    "Non-finite concentration for '{}' ({})",
                    row.area, row.year
                )));
            }

            rows.push(row);
        }

        Ok(rows)
    }
}

impl Default for PollutantReader {
    fn default() -> Self {
        Self::new()
    }
}
