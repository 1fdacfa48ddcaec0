//! Engine configuration.
//!
//! Defaults reproduce the reference simulation: one update per second at speed
//! 1.0, speed clamped to `[0.5, 3.0]`, 1-3 interactions per update, a 70/20/10
//! view/like/share split, viral boosts of 1-5 views and a trending threshold of 50.

use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;

/// Tunable parameters of the simulation engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Milliseconds between updates at speed 1.0.
    pub base_update_interval_ms: f64,

    /// Speed multiplier the engine starts with (clamped on construction).
    pub initial_update_speed: f64,

    pub min_update_speed: f64,
    pub max_update_speed: f64,

    /// Articles scoring strictly above this count as trending.
    pub trending_threshold: f64,

    /// Inclusive range of interaction events per simulation step.
    pub min_interactions: u32,
    pub max_interactions: u32,

    /// Action rolls below this are views.
    pub view_cutoff: f64,

    /// Action rolls below this (and at or above `view_cutoff`) are likes; the rest are shares.
    pub like_cutoff: f64,

    /// Inclusive range of extra views given to each related article on a share.
    pub min_viral_boost: u32,
    pub max_viral_boost: u32,

    /// Maximum recommendations per reader.
    pub recommendation_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_update_interval_ms: 1000.0,
            initial_update_speed: 1.0,
            min_update_speed: 0.5,
            max_update_speed: 3.0,
            trending_threshold: 50.0,
            min_interactions: 1,
            max_interactions: 3,
            view_cutoff: 0.7,
            like_cutoff: 0.9,
            min_viral_boost: 1,
            max_viral_boost: 5,
            recommendation_limit: 5,
        }
    }
}

impl EngineConfig {
    /// Parse and validate configuration from a TOML string.
    ///
    /// Missing fields take their default value.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Check that every range is well-formed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_update_interval_ms > 0.0) {
            return Err(ConfigError::invalid("base_update_interval_ms must be positive"));
        }
        if !(self.min_update_speed > 0.0)
            || !self.max_update_speed.is_finite()
            || self.min_update_speed > self.max_update_speed
        {
            return Err(ConfigError::invalid(
                "update speed range must be positive and min <= max",
            ));
        }
        if self.min_interactions > self.max_interactions {
            return Err(ConfigError::invalid("min_interactions exceeds max_interactions"));
        }
        if self.min_viral_boost > self.max_viral_boost {
            return Err(ConfigError::invalid("min_viral_boost exceeds max_viral_boost"));
        }
        if !(0.0..=1.0).contains(&self.view_cutoff)
            || !(0.0..=1.0).contains(&self.like_cutoff)
            || self.view_cutoff > self.like_cutoff
        {
            return Err(ConfigError::invalid(
                "action cutoffs must lie in [0, 1] with view_cutoff <= like_cutoff",
            ));
        }
        Ok(())
    }

    /// Clamp a speed multiplier into the configured range.
    ///
    /// NaN maps to `min_update_speed`.
    pub fn clamp_speed(&self, speed: f64) -> f64 {
        if speed.is_nan() {
            return self.min_update_speed;
        }
        speed.clamp(self.min_update_speed, self.max_update_speed)
    }
}
