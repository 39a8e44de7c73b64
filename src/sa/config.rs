//! SA configuration.

use crate::error::ConfigError;

/// Configuration for Simulated Annealing with geometric cooling.
///
/// The temperature starts at `initial_temperature` and is multiplied by
/// `cooling_rate` after every iteration; the loop runs while it stays
/// above `final_temperature`.
///
/// # Examples
///
/// ```
/// use combopt::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_final_temperature(0.01)
///     .with_cooling_rate(0.98)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Starting temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// The run stops once the temperature is at or below this value.
    pub final_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    /// Log progress every this many iterations. 0 disables progress logs.
    pub log_interval: usize,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10_000.0,
            final_temperature: 0.1,
            cooling_rate: 0.995,
            seed: None,
            log_interval: 500,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_final_temperature(mut self, t: f64) -> Self {
        self.final_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_log_interval(mut self, n: usize) -> Self {
        self.log_interval = n;
        self
    }

    /// Approximate number of iterations before the temperature drops to
    /// `final_temperature`. Meaningful only for a valid configuration.
    pub fn estimated_iterations(&self) -> usize {
        let steps = (self.final_temperature / self.initial_temperature).ln()
            / self.cooling_rate.ln();
        if steps.is_finite() && steps > 0.0 {
            steps.ceil() as usize
        } else {
            0
        }
    }

    /// Validates the configuration.
    ///
    /// Requires `initial_temperature > final_temperature > 0` and
    /// `0 < cooling_rate < 1`; anything else would never terminate or
    /// never start.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("initial_temperature", self.initial_temperature),
            ("final_temperature", self.final_temperature),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidTemperature { name, value });
            }
        }
        if self.final_temperature >= self.initial_temperature {
            return Err(ConfigError::TemperatureOrder {
                initial_temperature: self.initial_temperature,
                final_temperature: self.final_temperature,
            });
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(ConfigError::CoolingRate(self.cooling_rate));
        }
        Ok(())
    }
}
