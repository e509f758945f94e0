//! BetterRest Domain Layer
//!
//! This crate contains the value objects and trait interfaces for BetterRest.
//! Apart from `chrono` for time-of-day arithmetic it has no external
//! dependencies, and it defines the concepts every other layer depends upon.
//!
//! ## Key Concepts
//!
//! - **Wake-up time**: the time of day the user wants to wake, no date
//! - **Sleep goal**: desired hours of sleep, 2 to 12 in whole hours
//! - **Caffeine intake**: cups of coffee per day, 1 to 10
//! - **Predicted bedtime**: wake-up time minus the model's predicted sleep
//!
//! ## Architecture
//!
//! - Pure value types with range invariants enforced at construction
//! - The regression model is a collaborator behind [`traits::SleepModel`]
//! - Model implementations live in `betterrest-model`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bedtime;
pub mod caffeine;
pub mod error;
pub mod sleep_goal;
pub mod step;
pub mod traits;
pub mod wake_up;

// Re-exports for convenience
pub use bedtime::{ClockStyle, PredictedBedtime};
pub use caffeine::CaffeineIntake;
pub use error::InputError;
pub use sleep_goal::SleepGoal;
pub use step::Step;
pub use traits::{OutputUnit, SleepFeatures, SleepModel, SleepPrediction};
pub use wake_up::WakeUpTime;

/// Seconds in one day, the period of every time-of-day value.
pub const SECONDS_PER_DAY: u32 = 24 * 60 * 60;
