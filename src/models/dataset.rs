use serde_json::{Map, Value};

use crate::error::{ProcessingError, Result};
use crate::models::{Enrichment, PollutantReading};
use crate::utils::constants::{AQI_FIELD, POLLUTANTS_FIELD};

/// A district's record. Fields other than the injected `pollutants` and `aqi` are opaque.
#[derive(Debug, Clone, PartialEq)]
pub struct DistrictEntry {
    pub name: String,
    pub record: Map<String, Value>,
}

impl DistrictEntry {
    pub fn new(name: &str, record: Map<String, Value>) -> Self {
        Self {
            name: name.to_string(),
            record,
        }
    }

    /// Attach (or overwrite) the pollutant estimates and AQI bucket.
    pub fn apply(&mut self, enrichment: &Enrichment) -> Result<()> {
        let pollutants = serde_json::to_value(enrichment.pollutants)?;
        self.record.insert(POLLUTANTS_FIELD.to_string(), pollutants);
        self.record
            .insert(AQI_FIELD.to_string(), Value::from(enrichment.aqi));
        Ok(())
    }

    pub fn aqi(&self) -> Option<u8> {
        self.record
            .get(AQI_FIELD)
            .and_then(Value::as_u64)
            .and_then(|v| u8::try_from(v).ok())
    }

    pub fn pollutants(&self) -> Option<PollutantReading> {
        self.record
            .get(POLLUTANTS_FIELD)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    pub fn is_enriched(&self) -> bool {
        self.record.contains_key(POLLUTANTS_FIELD) && self.aqi().is_some()
    }
}

/// All districts recorded for one year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearSlice {
    /// The key as it appeared in the source document.
    pub key: String,
    pub year: i32,
    pub districts: Vec<DistrictEntry>,
}

/// Nested year -> district -> record dataset, preserving document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemperatureDataset {
    pub years: Vec<YearSlice>,
}

impl TemperatureDataset {
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(top) = value else {
            return Err(ProcessingError::InvalidFormat(
                "Temperature dataset must be a JSON object keyed by year".to_string(),
            ));
        };

        let mut years = Vec::with_capacity(top.len());
        for (key, districts_value) in top {
            let year = key.trim().parse::<i32>().map_err(|_| {
                ProcessingError::InvalidFormat(format!("Invalid year key: '{}'", key))
            })?;

            let Value::Object(districts_map) = districts_value else {
                return Err(ProcessingError::InvalidFormat(format!(
                    "Year {} must map district names to records",
                    key
                )));
            };

            let mut districts = Vec::with_capacity(districts_map.len());
            for (name, record_value) in districts_map {
                let Value::Object(record) = record_value else {
                    return Err(ProcessingError::InvalidFormat(format!(
                        "Record for '{}' in {} is not an object",
                        name, key
                    )));
                };
                districts.push(DistrictEntry { name, record });
            }

            years.push(YearSlice {
                key,
                year,
                districts,
            });
        }

        Ok(Self { years })
    }

    pub fn to_value(&self) -> Value {
        let mut top = Map::with_capacity(self.years.len());
        for slice in &self.years {
            let mut districts = Map::with_capacity(slice.districts.len());
            for entry in &slice.districts {
                districts.insert(entry.name.clone(), Value::Object(entry.record.clone()));
            }
            top.insert(slice.key.clone(), Value::Object(districts));
        }
        Value::Object(top)
    }

    pub fn entry_count(&self) -> usize {
        self.years.iter().map(|y| y.districts.len()).sum()
    }

    pub fn entries(&self) -> impl Iterator<Item = (i32, &DistrictEntry)> {
        self.years
            .iter()
            .flat_map(|slice| slice.districts.iter().map(move |d| (slice.year, d)))
    }

    pub fn distinct_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.years.iter().map(|y| y.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }
}
