//! BetterRest Model Layer
//!
//! Implementations of the `SleepModel` trait from `betterrest-domain`.
//!
//! # Models
//!
//! - `LinearSleepModel`: linear regressor evaluated from a JSON artifact
//! - `OnDemandModel`: loads its artifact on first inference
//! - `MockSleepModel`: deterministic mock for testing
//!
//! # Examples
//!
//! ```
//! use betterrest_model::MockSleepModel;
//! use betterrest_domain::{SleepFeatures, SleepModel};
//!
//! let model = MockSleepModel::new(8.0 * 3600.0);
//! let features = SleepFeatures { wake: 25_200.0, estimated_sleep: 8.0, coffee: 1.0 };
//! let prediction = model.infer(&features).unwrap();
//! assert_eq!(prediction.seconds(), 28_800.0);
//! ```

#![warn(missing_docs)]

pub mod artifact;
pub mod linear;
pub mod on_demand;

use betterrest_domain::{OutputUnit, SleepFeatures, SleepModel, SleepPrediction};
use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;

pub use artifact::{Coefficients, ModelArtifact, BUNDLED_ARTIFACT};
pub use linear::LinearSleepModel;
pub use on_demand::{ModelSource, OnDemandModel};

/// Errors that can occur while loading or running a sleep model
#[derive(Error, Debug)]
pub enum ModelError {
    /// Artifact could not be read
    #[error("Failed to load model artifact: {0}")]
    Load(String),

    /// Artifact is malformed or incompatible
    #[error("Invalid model artifact: {0}")]
    InvalidArtifact(String),

    /// Evaluation failed
    #[error("Inference error: {0}")]
    Inference(String),
}

impl From<serde_json::Error> for ModelError {
    fn from(e: serde_json::Error) -> Self {
        ModelError::InvalidArtifact(e.to_string())
    }
}

/// Mock sleep model for deterministic testing
///
/// Returns a fixed prediction without evaluating anything. Clones share the
/// call counter and failure switch, so a test can keep a handle while the
/// model itself is owned by a predictor.
///
/// # Examples
///
/// ```
/// use betterrest_model::MockSleepModel;
/// use betterrest_domain::{SleepFeatures, SleepModel};
///
/// let model = MockSleepModel::failing();
/// let features = SleepFeatures { wake: 0.0, estimated_sleep: 8.0, coffee: 1.0 };
/// assert!(model.infer(&features).is_err());
/// assert_eq!(model.call_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockSleepModel {
    actual_sleep: Rc<Cell<f64>>,
    unit: OutputUnit,
    failing: Rc<Cell<bool>>,
    call_count: Rc<Cell<usize>>,
    last_features: Rc<Cell<Option<SleepFeatures>>>,
}

impl MockSleepModel {
    /// Create a mock that always predicts `actual_sleep` seconds
    pub fn new(actual_sleep: f64) -> Self {
        Self {
            actual_sleep: Rc::new(Cell::new(actual_sleep)),
            unit: OutputUnit::Seconds,
            failing: Rc::new(Cell::new(false)),
            call_count: Rc::new(Cell::new(0)),
            last_features: Rc::new(Cell::new(None)),
        }
    }

    /// Create a mock whose every inference fails
    pub fn failing() -> Self {
        let model = Self::default();
        model.set_failing(true);
        model
    }

    /// Report predictions in a different unit
    pub fn with_unit(mut self, unit: OutputUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Change the fixed prediction
    pub fn set_response(&self, actual_sleep: f64) {
        self.actual_sleep.set(actual_sleep);
    }

    /// Switch failure on or off
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    /// Get the number of times infer was called
    pub fn call_count(&self) -> usize {
        self.call_count.get()
    }

    /// Features passed to the most recent call
    pub fn last_features(&self) -> Option<SleepFeatures> {
        self.last_features.get()
    }
}

impl Default for MockSleepModel {
    fn default() -> Self {
        Self::new(8.0 * 3600.0)
    }
}

impl SleepModel for MockSleepModel {
    type Error = ModelError;

    fn infer(&self, features: &SleepFeatures) -> Result<SleepPrediction, Self::Error> {
        self.call_count.set(self.call_count.get() + 1);
        self.last_features.set(Some(*features));

        if self.failing.get() {
            return Err(ModelError::Inference("Mock error".to_string()));
        }

        Ok(SleepPrediction {
            actual_sleep: self.actual_sleep.get(),
            unit: self.unit,
        })
    }
}
