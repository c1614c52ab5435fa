use crate::error::{ProcessingError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the multiplicative noise applied to each enriched entry.
pub trait JitterSource {
    fn draw(&mut self) -> f64;
}

/// Uniform jitter in `[low, high]`.
pub struct UniformJitter<R: Rng> {
    rng: R,
    low: f64,
    high: f64,
}

impl<R: Rng> UniformJitter<R> {
    pub fn new(rng: R, low: f64, high: f64) -> Result<Self> {
        validate_bounds(low, high)?;
        Ok(Self { rng, low, high })
    }
}

impl UniformJitter<StdRng> {
    pub fn seeded(seed: u64, low: f64, high: f64) -> Result<Self> {
        Self::new(StdRng::seed_from_u64(seed), low, high)
    }

    pub fn from_entropy(low: f64, high: f64) -> Result<Self> {
        Self::new(StdRng::from_entropy(), low, high)
    }
}

impl<R: Rng> JitterSource for UniformJitter<R> {
    fn draw(&mut self) -> f64 {
        if self.low == self.high {
            return self.low;
        }
        self.rng.gen_range(self.low..=self.high)
    }
}

/// Always returns the same factor. `FixedJitter(1.0)` disables noise.
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn draw(&mut self) -> f64 {
        self.0
    }
}

pub fn validate_bounds(low: f64, high: f64) -> Result<()> {
    if !low.is_finite() || !high.is_finite() || low <= 0.0 || low > high {
        return Err(ProcessingError::Config(format!(
            "Invalid jitter bounds [{}, {}]: expected finite, positive, min <= max",
            low, high
        )));
    }
    Ok(())
}
