use crate::models::PollutantRow;
use crate::utils::area::normalize_area;
use crate::utils::constants::BASELINE_YEAR;
use std::collections::HashMap;

/// Pollutant rows keyed by normalized area name and year.
///
/// When the table repeats an (area, year) pair the first row wins.
#[derive(Debug, Clone, Default)]
pub struct PollutantIndex {
    rows: HashMap<(String, i32), PollutantRow>,
}

impl PollutantIndex {
    pub fn from_rows(rows: Vec<PollutantRow>) -> Self {
        let mut index = HashMap::with_capacity(rows.len());
        for row in rows {
            index.entry((row.normalized_area(), row.year)).or_insert(row);
        }
        Self { rows: index }
    }

    pub fn get(&self, area: &str, year: i32) -> Option<&PollutantRow> {
        self.rows.get(&(normalize_area(area), year))
    }

    pub fn baseline(&self, area: &str) -> Option<&PollutantRow> {
        self.get(area, BASELINE_YEAR)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
