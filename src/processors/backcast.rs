use crate::utils::constants::{BACKCAST_MULTIPLIERS, BASELINE_YEAR};

/// Scale factors approximating years before the baseline from baseline concentrations.
pub struct BackcastTable {
    multipliers: &'static [(i32, f64)],
}

impl BackcastTable {
    pub fn new() -> Self {
        Self {
            multipliers: &BACKCAST_MULTIPLIERS,
        }
    }

    pub fn multiplier(&self, year: i32) -> Option<f64> {
        self.multipliers
            .iter()
            .find(|(y, _)| *y == year)
            .map(|(_, factor)| *factor)
    }

    /// Years before the baseline that have no multiplier
    pub fn uncovered_years<I: IntoIterator<Item = i32>>(&self, years: I) -> Vec<i32> {
        let mut missing: Vec<i32> = years
            .into_iter()
            .filter(|y| *y < BASELINE_YEAR && self.multiplier(*y).is_none())
            .collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }
}

impl Default for BackcastTable {
    fn default() -> Self {
        Self::new()
    }
}
