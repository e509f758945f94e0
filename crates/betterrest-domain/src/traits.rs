//! Trait definitions for external interactions
//!
//! The pre-trained regression model is a collaborator, not part of the domain.
//! Implementations live in `betterrest-model`.

use crate::{CaffeineIntake, SleepGoal, WakeUpTime};

/// Feature vector fed to the sleep model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepFeatures {
    /// Wake-up time in seconds since midnight
    pub wake: f64,

    /// Desired sleep in hours
    pub estimated_sleep: f64,

    /// Cups of coffee per day
    pub coffee: f64,
}

impl SleepFeatures {
    /// Build the feature vector from the three user inputs
    pub fn from_inputs(wake_up: WakeUpTime, sleep_goal: SleepGoal, coffee: CaffeineIntake) -> Self {
        Self {
            wake: wake_up.seconds_since_midnight(),
            estimated_sleep: sleep_goal.hours(),
            coffee: coffee.as_feature(),
        }
    }
}

/// Raw model output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepPrediction {
    /// Predicted actual sleep, in `unit`
    pub actual_sleep: f64,

    /// Unit the model was trained to emit
    pub unit: OutputUnit,
}

impl SleepPrediction {
    /// Predicted actual sleep in seconds
    pub fn seconds(&self) -> f64 {
        self.unit.to_seconds(self.actual_sleep)
    }
}

/// Unit of a model's `actual_sleep` output
///
/// Depends on how the artifact was trained, so every prediction carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputUnit {
    /// Seconds
    #[default]
    Seconds,

    /// Hours
    Hours,
}

impl OutputUnit {
    /// Get the unit name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputUnit::Seconds => "seconds",
            OutputUnit::Hours => "hours",
        }
    }

    /// Convert a value in this unit to seconds
    pub fn to_seconds(&self, value: f64) -> f64 {
        match self {
            OutputUnit::Seconds => value,
            OutputUnit::Hours => value * 3600.0,
        }
    }
}

/// Trait for the pre-trained sleep regression model
///
/// Implemented by the infrastructure layer (betterrest-model)
pub trait SleepModel {
    /// Error type for model loading or inference
    type Error;

    /// Predict actual sleep for the given features
    ///
    /// May fail to load the underlying artifact or to evaluate it.
    fn infer(&self, features: &SleepFeatures) -> Result<SleepPrediction, Self::Error>;
}
