/// Default file locations
pub const DEFAULT_TEMPERATURE_PATH: &str = "static/data/bengaluru_area_temperatures.json";
pub const DEFAULT_POLLUTANT_PATH: &str = "static/data/historical_yearly_aqi.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "static/data/bengaluru_with_pollution.json";

/// Configuration sources
pub const DEFAULT_CONFIG_NAME: &str = "aqi-enricher";
pub const ENV_PREFIX: &str = "AQI_ENRICHER";

/// Year whose pollutant rows serve as the backcast baseline
pub const BASELINE_YEAR: i32 = 2020;

/// Backcast multipliers applied to baseline concentrations
pub const BACKCAST_MULTIPLIERS: [(i32, f64); 5] = [
    (2019, 1.10),
    (2018, 1.00),
    (2017, 0.92),
    (2016, 0.85),
    (2015, 0.78),
];

/// Jitter bounds
pub const DEFAULT_JITTER_MIN: f64 = 0.9;
pub const DEFAULT_JITTER_MAX: f64 = 1.1;

/// SO2 is not measured; it is estimated as a fraction of NO2
pub const SO2_FROM_NO2_RATIO: f64 = 0.3;

/// AQI bucket bounds
pub const AQI_MIN: u8 = 1;
pub const AQI_MAX: u8 = 5;

/// Record fields injected by the enrichment
pub const POLLUTANTS_FIELD: &str = "pollutants";
pub const AQI_FIELD: &str = "aqi";
