//! Linear sleep regressor
//!
//! Formula: `actual_sleep = intercept + w·wake + s·estimated_sleep + c·coffee`,
//! optionally clamped to the artifact's output bounds.

use crate::artifact::ModelArtifact;
use crate::ModelError;
use betterrest_domain::{SleepFeatures, SleepModel, SleepPrediction};
use std::path::Path;
use tracing::debug;

/// Sleep model evaluated from a [`ModelArtifact`]
#[derive(Debug, Clone)]
pub struct LinearSleepModel {
    artifact: ModelArtifact,
}

impl LinearSleepModel {
    /// Wrap a validated artifact
    pub fn new(artifact: ModelArtifact) -> Result<Self, ModelError> {
        artifact.validate()?;
        Ok(Self { artifact })
    }

    /// The model compiled into the binary
    pub fn bundled() -> Result<Self, ModelError> {
        Self::new(ModelArtifact::bundled()?)
    }

    /// Load a model from an artifact file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        Self::new(ModelArtifact::load(path)?)
    }

    /// The artifact backing this model
    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }
}

impl SleepModel for LinearSleepModel {
    type Error = ModelError;

    fn infer(&self, features: &SleepFeatures) -> Result<SleepPrediction, Self::Error> {
        let a = &self.artifact;
        let mut actual_sleep = a.intercept
            + a.coefficients.wake * features.wake
            + a.coefficients.estimated_sleep * features.estimated_sleep
            + a.coefficients.coffee * features.coffee;

        if !actual_sleep.is_finite() {
            return Err(ModelError::Inference(format!(
                "non-finite output for {:?}",
                features
            )));
        }

        // Apply bounds
        if let Some(min) = a.min_output {
            actual_sleep = actual_sleep.max(min);
        }
        if let Some(max) = a.max_output {
            actual_sleep = actual_sleep.min(max);
        }

        debug!(
            "{} v{}: {:?} -> {} {}",
            a.name,
            a.version,
            features,
            actual_sleep,
            a.output_unit.as_str()
        );

        Ok(SleepPrediction {
            actual_sleep,
            unit: a.output_unit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::Coefficients;
    use betterrest_domain::OutputUnit;

    fn artifact(intercept: f64, wake: f64, estimated_sleep: f64, coffee: f64) -> ModelArtifact {
        ModelArtifact {
            name: "test".to_string(),
            version: "0".to_string(),
            output_unit: OutputUnit::Seconds,
            intercept,
            coefficients: Coefficients {
                wake,
                estimated_sleep,
                coffee,
            },
            min_output: None,
            max_output: None,
        }
    }

    fn features(wake: f64, estimated_sleep: f64, coffee: f64) -> SleepFeatures {
        SleepFeatures {
            wake,
            estimated_sleep,
            coffee,
        }
    }

    #[test]
    fn test_weighted_sum() {
        let model = LinearSleepModel::new(artifact(100.0, 0.5, 3600.0, -60.0)).unwrap();
        let prediction = model.infer(&features(1000.0, 8.0, 2.0)).unwrap();

        // 100 + 500 + 28800 - 120
        assert_eq!(prediction.actual_sleep, 29_280.0);
        assert_eq!(prediction.unit, OutputUnit::Seconds);
    }

    #[test]
    fn test_bounds_clamp() {
        let mut a = artifact(0.0, 0.0, 3600.0, 0.0);
        a.min_output = Some(5.0 * 3600.0);
        a.max_output = Some(9.0 * 3600.0);
        let model = LinearSleepModel::new(a).unwrap();

        assert_eq!(model.infer(&features(0.0, 2.0, 1.0)).unwrap().actual_sleep, 18_000.0);
        assert_eq!(model.infer(&features(0.0, 12.0, 1.0)).unwrap().actual_sleep, 32_400.0);
    }

    #[test]
    fn test_non_finite_output_fails() {
        let model = LinearSleepModel::new(artifact(0.0, 0.0, 1.0, 0.0)).unwrap();
        let result = model.infer(&features(0.0, f64::INFINITY, 1.0));
        assert!(matches!(result, Err(ModelError::Inference(_))));
    }

    #[test]
    fn test_invalid_artifact_rejected() {
        let result = LinearSleepModel::new(artifact(f64::NAN, 0.0, 0.0, 0.0));
        assert!(matches!(result, Err(ModelError::InvalidArtifact(_))));
    }

    #[test]
    fn test_bundled_model_is_deterministic() {
        let model = LinearSleepModel::bundled().unwrap();
        let f = features(25_200.0, 8.0, 1.0);
        assert_eq!(model.infer(&f).unwrap(), model.infer(&f).unwrap());
    }
}
