//! Configuration for the predictor

use serde::{Deserialize, Serialize};

/// Configuration for the [`BedtimePredictor`](crate::BedtimePredictor)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Predicted sleep at or above this many hours is rejected as an
    /// inference failure (usually an hours/seconds mix-up in the artifact)
    pub max_sleep_hours: f64,
}

impl PredictorConfig {
    /// Ceiling on predicted sleep, in seconds
    pub fn max_sleep_seconds(&self) -> f64 {
        self.max_sleep_hours * 3600.0
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.max_sleep_hours.is_finite() || self.max_sleep_hours <= 0.0 {
            return Err("max_sleep_hours must be a positive number".to_string());
        }
        if self.max_sleep_hours > 24.0 {
            return Err("max_sleep_hours cannot exceed 24".to_string());
        }
        Ok(())
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            max_sleep_hours: 24.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PredictorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_sleep_seconds(), 86_400.0);
    }

    #[test]
    fn test_invalid_ceiling() {
        let config = PredictorConfig {
            max_sleep_hours: 0.0,
        };
        assert!(config.validate().is_err());

        let config = PredictorConfig {
            max_sleep_hours: 30.0,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_section() {
        let config: PredictorConfig = toml::from_str("max_sleep_hours = 16.0").unwrap();
        assert_eq!(config.max_sleep_hours, 16.0);

        let empty: PredictorConfig = toml::from_str("").unwrap();
        assert_eq!(empty, PredictorConfig::default());
    }
}
