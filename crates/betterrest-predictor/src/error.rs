//! Error types for the predictor

use thiserror::Error;

/// Errors that can occur during bedtime prediction
///
/// There is a single kind: the model could not produce a usable result.
/// The message carries the detail for logs; users only ever see the fixed
/// [`Notice`](crate::Notice).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictorError {
    /// Model failed to load, failed to evaluate, or returned an unusable value
    #[error("Inference failure: {0}")]
    InferenceFailure(String),
}
