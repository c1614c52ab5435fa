use crate::error::Result;
use crate::processors::jitter::validate_bounds;
use crate::utils::constants::{
    DEFAULT_CONFIG_NAME, DEFAULT_JITTER_MAX, DEFAULT_JITTER_MIN, DEFAULT_OUTPUT_PATH,
    DEFAULT_POLLUTANT_PATH, DEFAULT_TEMPERATURE_PATH, ENV_PREFIX,
};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Run settings, layered as defaults < config file < `AQI_ENRICHER_*` environment < CLI flags.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub temperature_path: PathBuf,
    pub pollutant_path: PathBuf,
    pub output_path: PathBuf,
    #[serde(default)]
    pub seed: Option<u64>,
    pub jitter_min: f64,
    pub jitter_max: f64,
    pub strict: bool,
}

impl Settings {
    /// Load settings. An explicit `config_file` must exist; the default one is optional.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        Self::load_from(config_file, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(config_file: Option<&Path>, environment: Environment) -> Result<Self> {
        let builder = Config::builder()
            .set_default("temperature_path", DEFAULT_TEMPERATURE_PATH)?
            .set_default("pollutant_path", DEFAULT_POLLUTANT_PATH)?
            .set_default("output_path", DEFAULT_OUTPUT_PATH)?
            .set_default("jitter_min", DEFAULT_JITTER_MIN)?
            .set_default("jitter_max", DEFAULT_JITTER_MAX)?
            .set_default("strict", false)?;

        let builder = match config_file {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_NAME).required(false)),
        };

        let settings: Settings = builder
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        validate_bounds(self.jitter_min, self.jitter_max)
    }

    /// Apply command-line flags on top of the loaded settings
    pub fn apply_overrides(&mut self, overrides: SettingsOverrides) {
        if let Some(path) = overrides.temperature_path {
            self.temperature_path = path;
        }
        if let Some(path) = overrides.pollutant_path {
            self.pollutant_path = path;
        }
        if let Some(path) = overrides.output_path {
            self.output_path = path;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if overrides.strict {
            self.strict = true;
        }
    }
}

/// Values given on the command line. `None`/`false` leaves the loaded setting alone.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub temperature_path: Option<PathBuf>,
    pub pollutant_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub strict: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            temperature_path: PathBuf::from(DEFAULT_TEMPERATURE_PATH),
            pollutant_path: PathBuf::from(DEFAULT_POLLUTANT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            seed: None,
            jitter_min: DEFAULT_JITTER_MIN,
            jitter_max: DEFAULT_JITTER_MAX,
            strict: false,
        }
    }
}
