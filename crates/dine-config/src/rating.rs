//! Rating engine thresholds.

use dine_core::rating::{DEFAULT_DOWN_MAX, DEFAULT_UP_MIN, RatingThresholds};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_up_min() -> f64 {
    DEFAULT_UP_MIN
}

const fn default_down_max() -> f64 {
    DEFAULT_DOWN_MAX
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct RatingConfig {
    /// Mean visit score strictly above this rates a restaurant `up`.
    #[serde(default = "default_up_min")]
    pub up_min: f64,

    /// Mean visit score strictly below this rates a restaurant `down`.
    #[serde(default = "default_down_max")]
    pub down_max: f64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            up_min: default_up_min(),
            down_max: default_down_max(),
        }
    }
}

impl RatingConfig {
    #[must_use]
    pub const fn thresholds(&self) -> RatingThresholds {
        RatingThresholds {
            up_min: self.up_min,
            down_max: self.down_max,
        }
    }

    /// Thresholds must bracket zero and stay inside the score range.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.up_min) {
            return Err(ConfigError::InvalidValue {
                field: "rating.up_min".into(),
                reason: format!("{} is outside 0.0..=1.0", self.up_min),
            });
        }
        if !(-1.0..=0.0).contains(&self.down_max) {
            return Err(ConfigError::InvalidValue {
                field: "rating.down_max".into(),
                reason: format!("{} is outside -1.0..=0.0", self.down_max),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_engine() {
        let config = RatingConfig::default();
        assert_eq!(config.thresholds(), RatingThresholds::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_positive_down_max() {
        let config = RatingConfig {
            up_min: 0.5,
            down_max: 0.2,
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("rating.down_max"));
    }

    #[test]
    fn rejects_up_min_above_one() {
        let config = RatingConfig {
            up_min: 1.5,
            down_max: -0.5,
        };
        assert!(config.validate().is_err());
    }
}
