//! BetterRest Predictor
//!
//! Recommends a bedtime from a wake-up time, a sleep goal and daily coffee
//! intake, using a pre-trained regression model.
//!
//! # Architecture
//!
//! ```text
//! UI input change → BedtimeForm → BedtimePredictor → SleepModel → PredictedBedtime
//! ```
//!
//! The model is injected through the `SleepModel` trait, so any implementation
//! from `betterrest-model` (or a test double) can be plugged in.
//!
//! # Example Usage
//!
//! ```
//! use betterrest_predictor::{BedtimeForm, BedtimePredictor, Outcome};
//! use betterrest_domain::{Step, WakeUpTime};
//! use betterrest_model::MockSleepModel;
//!
//! let predictor = BedtimePredictor::new(MockSleepModel::new(8.0 * 3600.0));
//! let mut form = BedtimeForm::new(predictor);
//!
//! let outcome = form.set_wake_up(WakeUpTime::new(6, 30).unwrap());
//! assert!(matches!(outcome, Outcome::Updated(_)));
//!
//! // Steppers saturate at their bounds
//! form.step_coffee(Step::Down);
//! assert_eq!(form.inputs().coffee.cups(), 1);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod form;
mod predictor;


pub use config::PredictorConfig;
pub use error::PredictorError;
pub use form::{BedtimeForm, FormInputs, Notice, Outcome, NOTICE_MESSAGE, NOTICE_TITLE};
pub use predictor::BedtimePredictor;
