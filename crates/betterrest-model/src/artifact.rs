//! Model artifact format
//!
//! A trained sleep regressor is shipped as a small JSON document:
//!
//! ```json
//! {
//!   "name": "SleepCalculator",
//!   "version": "1.0.0",
//!   "output_unit": "seconds",
//!   "intercept": 1200.0,
//!   "coefficients": { "wake": 0.01, "estimated_sleep": 3600.0, "coffee": -600.0 }
//! }
//! ```
//!
//! `output_unit` defaults to `seconds` when omitted.

use crate::ModelError;
use betterrest_domain::OutputUnit;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Artifact bundled into the binary, used when no path is configured
pub const BUNDLED_ARTIFACT: &str = include_str!("../models/sleep_calculator.json");

#[derive(Serialize, Deserialize)]
#[serde(remote = "OutputUnit", rename_all = "lowercase")]
enum OutputUnitDef {
    Seconds,
    Hours,
}

/// Per-feature weights of the linear regressor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    /// Weight of the wake-up time (seconds since midnight)
    pub wake: f64,

    /// Weight of the desired sleep (hours)
    pub estimated_sleep: f64,

    /// Weight of the coffee intake (cups)
    pub coffee: f64,
}

/// A trained linear sleep regressor as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Model name
    pub name: String,

    /// Model version
    pub version: String,

    /// Unit of the predicted `actual_sleep`
    #[serde(with = "OutputUnitDef", default)]
    pub output_unit: OutputUnit,

    /// Constant term
    pub intercept: f64,

    /// Feature weights
    pub coefficients: Coefficients,

    /// Lower clamp on the output, in `output_unit`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_output: Option<f64>,

    /// Upper clamp on the output, in `output_unit`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output: Option<f64>,
}

impl ModelArtifact {
    /// The artifact compiled into the binary
    pub fn bundled() -> Result<Self, ModelError> {
        Self::from_json(BUNDLED_ARTIFACT)
    }

    /// Parse and validate an artifact from JSON text
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let artifact: ModelArtifact = serde_json::from_str(json)?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Read, parse and validate an artifact file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| ModelError::Load(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Check that every parameter is usable
    pub fn validate(&self) -> Result<(), ModelError> {
        let params = [
            ("intercept", self.intercept),
            ("coefficients.wake", self.coefficients.wake),
            ("coefficients.estimated_sleep", self.coefficients.estimated_sleep),
            ("coefficients.coffee", self.coefficients.coffee),
        ];
        if let Some((name, _)) = params.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ModelError::InvalidArtifact(format!("{} must be finite", name)));
        }

        for (name, bound) in [("min_output", self.min_output), ("max_output", self.max_output)] {
            if bound.is_some_and(|b| !b.is_finite()) {
                return Err(ModelError::InvalidArtifact(format!("{} must be finite", name)));
            }
        }

        if let (Some(min), Some(max)) = (self.min_output, self.max_output) {
            if min > max {
                return Err(ModelError::InvalidArtifact(
                    "min_output cannot exceed max_output".to_string(),
                ));
            }
        }

        Ok(())
    }
}
