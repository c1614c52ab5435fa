use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::utils::area::normalize_area;

/// One row of the historical pollutant table: yearly averages for an area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PollutantRow {
    #[validate(length(min = 1))]
    pub area: String,

    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,

    #[validate(range(min = 0.0), custom(function = "validate_finite"))]
    pub pm2_5_avg: f64,

    #[validate(range(min = 0.0), custom(function = "validate_finite"))]
    pub pm10_avg: f64,

    #[validate(range(min = 0.0), custom(function = "validate_finite"))]
    pub no2_avg: f64,

    #[validate(range(min = 0.0), custom(function = "validate_finite"))]
    pub o3_avg: f64,

    #[validate(range(min = 0.0), custom(function = "validate_finite"))]
    pub co_avg: f64,
}

impl PollutantRow {
    pub fn new(
        area: &str,
        year: i32,
        pm2_5_avg: f64,
        pm10_avg: f64,
        no2_avg: f64,
        o3_avg: f64,
        co_avg: f64,
    ) -> Self {
        Self {
            area: area.to_string(),
            year,
            pm2_5_avg,
            pm10_avg,
            no2_avg,
            o3_avg,
            co_avg,
        }
    }

    pub fn normalized_area(&self) -> String {
        normalize_area(&self.area)
    }

    pub fn concentrations(&self) -> [f64; 5] {
        [
            self.pm2_5_avg,
            self.pm10_avg,
            self.no2_avg,
            self.o3_avg,
            self.co_avg,
        ]
    }

    /// NaN and infinities cannot be represented in the JSON output
    pub fn has_finite_concentrations(&self) -> bool {
        self.concentrations().iter().all(|v| v.is_finite())
    }
}

fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("non_finite"))
    }
}
