//! Core BedtimePredictor implementation

use crate::config::PredictorConfig;
use crate::error::PredictorError;
use betterrest_domain::{
    CaffeineIntake, PredictedBedtime, SleepFeatures, SleepGoal, SleepModel, WakeUpTime,
};
use tracing::debug;

/// Turns the three user inputs into a recommended bedtime
///
/// Stateless: the same inputs against the same model give the same bedtime.
pub struct BedtimePredictor<M>
where
    M: SleepModel,
{
    model: M,
    config: PredictorConfig,
}

impl<M> BedtimePredictor<M>
where
    M: SleepModel,
    M::Error: std::fmt::Display,
{
    /// Create a predictor with the default configuration
    pub fn new(model: M) -> Self {
        Self::with_config(model, PredictorConfig::default())
    }

    /// Create a predictor with a specific configuration
    pub fn with_config(model: M, config: PredictorConfig) -> Self {
        Self { model, config }
    }

    /// Predict the bedtime for the given inputs
    ///
    /// Feeds `(wake seconds, sleep goal hours, coffee cups)` to the model,
    /// converts its `actual_sleep` to seconds using the unit it reports, and
    /// subtracts that from the wake-up time.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::InferenceFailure`] if the model fails, or if
    /// the predicted duration, rounded to whole seconds, is not finite, under
    /// one second, or at or above the configured ceiling.
    pub fn predict(
        &self,
        wake_up: WakeUpTime,
        sleep_goal: SleepGoal,
        coffee: CaffeineIntake,
    ) -> Result<PredictedBedtime, PredictorError> {
        let features = SleepFeatures::from_inputs(wake_up, sleep_goal, coffee);
        debug!("Predicting bedtime for {:?}", features);

        let prediction = self
            .model
            .infer(&features)
            .map_err(|e| PredictorError::InferenceFailure(e.to_string()))?;

        // Checked at whole-second precision, the same precision the subtraction uses
        let seconds = prediction.seconds().round();
        if !seconds.is_finite() || seconds < 1.0 || seconds >= self.config.max_sleep_seconds() {
            return Err(PredictorError::InferenceFailure(format!(
                "implausible sleep duration: {} {} ({} s)",
                prediction.actual_sleep,
                prediction.unit.as_str(),
                prediction.seconds()
            )));
        }

        let bedtime = PredictedBedtime::before(wake_up, seconds);
        debug!(
            "Predicted {:.2} h of sleep, bedtime {} for wake-up {}",
            bedtime.sleep_hours(),
            bedtime,
            wake_up
        );

        Ok(bedtime)
    }
}
