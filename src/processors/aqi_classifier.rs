use crate::models::{Pollutant, PollutantReading};
use crate::utils::constants::AQI_MIN;

/// A concentration range. `high == None` is open-ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub low: f64,
    pub high: Option<f64>,
}

impl Breakpoint {
    pub const fn bounded(low: f64, high: f64) -> Self {
        Self {
            low,
            high: Some(high),
        }
    }

    pub const fn open(low: f64) -> Self {
        Self { low, high: None }
    }

    pub fn contains(&self, value: f64) -> bool {
        match self.high {
            Some(high) => self.low <= value && value < high,
            None => value >= self.low,
        }
    }
}

pub const SO2_BREAKPOINTS: [Breakpoint; 5] = [
    Breakpoint::bounded(0.0, 20.0),
    Breakpoint::bounded(20.0, 80.0),
    Breakpoint::bounded(80.0, 250.0),
    Breakpoint::bounded(250.0, 350.0),
    Breakpoint::open(350.0),
];

pub const NO2_BREAKPOINTS: [Breakpoint; 5] = [
    Breakpoint::bounded(0.0, 40.0),
    Breakpoint::bounded(40.0, 70.0),
    Breakpoint::bounded(70.0, 150.0),
    Breakpoint::bounded(150.0, 200.0),
    Breakpoint::open(200.0),
];

pub const PM10_BREAKPOINTS: [Breakpoint; 5] = [
    Breakpoint::bounded(0.0, 20.0),
    Breakpoint::bounded(20.0, 50.0),
    Breakpoint::bounded(50.0, 100.0),
    Breakpoint::bounded(100.0, 200.0),
    Breakpoint::open(200.0),
];

pub const PM25_BREAKPOINTS: [Breakpoint; 5] = [
    Breakpoint::bounded(0.0, 10.0),
    Breakpoint::bounded(10.0, 25.0),
    Breakpoint::bounded(25.0, 50.0),
    Breakpoint::bounded(50.0, 75.0),
    Breakpoint::open(75.0),
];

pub const O3_BREAKPOINTS: [Breakpoint; 5] = [
    Breakpoint::bounded(0.0, 60.0),
    Breakpoint::bounded(60.0, 100.0),
    Breakpoint::bounded(100.0, 140.0),
    Breakpoint::bounded(140.0, 180.0),
    Breakpoint::open(180.0),
];

pub const CO_BREAKPOINTS: [Breakpoint; 5] = [
    Breakpoint::bounded(0.0, 4400.0),
    Breakpoint::bounded(4400.0, 9400.0),
    Breakpoint::bounded(9400.0, 12400.0),
    Breakpoint::bounded(12400.0, 15400.0),
    Breakpoint::open(15400.0),
];

pub fn breakpoints_for(pollutant: Pollutant) -> &'static [Breakpoint] {
    match pollutant {
        Pollutant::So2 => &SO2_BREAKPOINTS,
        Pollutant::No2 => &NO2_BREAKPOINTS,
        Pollutant::Pm10 => &PM10_BREAKPOINTS,
        Pollutant::Pm25 => &PM25_BREAKPOINTS,
        Pollutant::O3 => &O3_BREAKPOINTS,
        Pollutant::Co => &CO_BREAKPOINTS,
    }
}

/// 1-based index of the first breakpoint containing `value`.
///
/// Values outside every range (negative, NaN) fall back to 1.
pub fn classify(value: f64, breakpoints: &[Breakpoint]) -> u8 {
    breakpoints
        .iter()
        .position(|bp| bp.contains(value))
        .map(|i| (i + 1) as u8)
        .unwrap_or(AQI_MIN)
}

pub struct AqiClassifier;

impl AqiClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn sub_index(&self, pollutant: Pollutant, value: f64) -> u8 {
        classify(value, breakpoints_for(pollutant))
    }

    pub fn sub_indices(&self, reading: &PollutantReading) -> Vec<(Pollutant, u8)> {
        reading
            .iter()
            .map(|(pollutant, value)| (pollutant, self.sub_index(pollutant, value)))
            .collect()
    }

    /// Overall AQI: the worst sub-index across all pollutants
    pub fn overall(&self, reading: &PollutantReading) -> u8 {
        overall_from_sub_indices(self.sub_indices(reading).into_iter().map(|(_, idx)| idx))
    }
}

impl Default for AqiClassifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn overall_from_sub_indices<I: IntoIterator<Item = u8>>(sub_indices: I) -> u8 {
    sub_indices.into_iter().max().unwrap_or(AQI_MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::AQI_MAX;

    fn all_tables() -> Vec<(Pollutant, &'static [Breakpoint])> {
        Pollutant::ALL
            .iter()
            .map(|p| (*p, breakpoints_for(*p)))
            .collect()
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(0.0, &PM25_BREAKPOINTS), 1);
        assert_eq!(classify(9.999, &PM25_BREAKPOINTS), 1);
        assert_eq!(classify(10.0, &PM25_BREAKPOINTS), 2);
        assert_eq!(classify(49.9, &PM25_BREAKPOINTS), 3);
        assert_eq!(classify(74.9, &PM25_BREAKPOINTS), 4);
        assert_eq!(classify(75.0, &PM25_BREAKPOINTS), 5);
        assert_eq!(classify(4400.0, &CO_BREAKPOINTS), 2);
        assert_eq!(classify(15399.0, &CO_BREAKPOINTS), 4);
    }

    #[test]
    fn test_values_past_last_lower_bound_are_five() {
        for (pollutant, table) in all_tables() {
            let last_low = table[table.len() - 1].low;
            for value in [last_low, last_low + 0.5, last_low * 10.0, f64::MAX] {
                assert_eq!(classify(value, table), AQI_MAX, "{} at {}", pollutant, value);
            }
        }
    }

    #[test]
    fn test_values_below_first_upper_bound_are_one() {
        for (pollutant, table) in all_tables() {
            let first_high = table[0].high.unwrap();
            for value in [0.0, first_high / 2.0, first_high - 1e-9] {
                assert_eq!(classify(value, table), 1, "{} at {}", pollutant, value);
            }
        }
    }

    #[test]
    fn test_classify_is_monotonic() {
        for (pollutant, table) in all_tables() {
            let top = table[table.len() - 1].low * 1.5;
            let mut previous = classify(0.0, table);
            let steps = 2000;
            for step in 1..=steps {
                let value = top * step as f64 / steps as f64;
                let current = classify(value, table);
                assert!(current >= previous, "{} dropped at {}", pollutant, value);
                previous = current;
            }
        }
    }

    #[test]
    fn test_out_of_range_values_fall_back_to_one() {
        assert_eq!(classify(-5.0, &NO2_BREAKPOINTS), 1);
        assert_eq!(classify(f64::NAN, &NO2_BREAKPOINTS), 1);
        assert_eq!(classify(500.0, &[]), 1);
    }

    #[test]
    fn test_overall_is_max_of_sub_indices() {
        assert_eq!(overall_from_sub_indices([2, 3, 5, 1, 4, 2]), 5);
        assert_eq!(overall_from_sub_indices([1, 1, 2, 1, 1, 1]), 2);
    }

    #[test]
    fn test_overall_for_reading() {
        let classifier = AqiClassifier::new();
        let reading = PollutantReading {
            pm25: 30.0, // 3
            pm10: 45.0, // 2
            no2: 35.0, // 1
            so2: 10.5, // 1
            o3: 150.0, // 4
            co: 1000.0, // 1
        };

        let subs: Vec<u8> = classifier
            .sub_indices(&reading)
            .into_iter()
            .map(|(_, idx)| idx)
            .collect();
        assert_eq!(subs, vec![3, 2, 1, 1, 4, 1]);
        assert_eq!(classifier.overall(&reading), 4);
    }
}
