//! # Harvest Configuration
//!
//! Balance knobs, loaded once at startup from TOML. Every key is optional;
//! an empty file yields the vanilla fortune model.
//!
//! ```toml
//! success_probability = 0.57
//! base_trials = 3
//! bonus_enchantment = "fortune"
//! expiry_delay_ticks = 1
//! sweep_interval_ticks = 1
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use harvest_shared::FORTUNE_ENCHANTMENT;

use crate::error::{HarvestError, HarvestResult};

/// Per-trial success probability of the vanilla seed drop (about 4/7).
pub const DEFAULT_SUCCESS_PROBABILITY: f64 = 0.57;

/// Trials rolled before any fortune bonus.
pub const DEFAULT_BASE_TRIALS: u32 = 3;

/// Configuration for the drop model and the interaction debouncer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarvestConfig {
    /// Probability that a single trial succeeds, in `[0, 1]`.
    pub success_probability: f64,
    /// Trials before the bonus level is added. At least 1.
    pub base_trials: u32,
    /// Enchantment read from the held item for the bonus level.
    pub bonus_enchantment: String,
    /// Ticks between scheduling an expiry and the entry being removed.
    pub expiry_delay_ticks: u64,
    /// Ticks between expiry sweeps.
    pub sweep_interval_ticks: u64,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            success_probability: DEFAULT_SUCCESS_PROBABILITY,
            base_trials: DEFAULT_BASE_TRIALS,
            bonus_enchantment: FORTUNE_ENCHANTMENT.to_string(),
            expiry_delay_ticks: 1,
            sweep_interval_ticks: 1,
        }
    }
}

impl HarvestConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::InvalidConfig`] if the document does not parse
    /// or fails [`HarvestConfig::validate`].
    pub fn from_toml_str(text: &str) -> HarvestResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| HarvestError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::ConfigRead`] if the file cannot be read, or
    /// [`HarvestError::InvalidConfig`] if its contents are unusable.
    pub fn load(path: impl AsRef<Path>) -> HarvestResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| HarvestError::ConfigRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Checks every field is within its usable range.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> HarvestResult<()> {
        if !(0.0..=1.0).contains(&self.success_probability) {
            return Err(HarvestError::InvalidConfig(format!(
                "success_probability must be within [0, 1], got {}",
                self.success_probability
            )));
        }
        if self.base_trials == 0 {
            return Err(HarvestError::InvalidConfig(
                "base_trials must be at least 1".to_string(),
            ));
        }
        if self.bonus_enchantment.trim().is_empty() {
            return Err(HarvestError::InvalidConfig(
                "bonus_enchantment must not be empty".to_string(),
            ));
        }
        if self.expiry_delay_ticks == 0 {
            return Err(HarvestError::InvalidConfig(
                "expiry_delay_ticks must be at least 1".to_string(),
            ));
        }
        if self.sweep_interval_ticks == 0 {
            return Err(HarvestError::InvalidConfig(
                "sweep_interval_ticks must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
