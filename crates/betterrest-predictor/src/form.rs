//! Screen state driven by the UI
//!
//! `BedtimeForm` holds the three inputs and the last displayed bedtime. Every
//! setter that changes a value recomputes immediately; a failed computation
//! leaves the displayed bedtime alone and raises a [`Notice`].

use crate::error::PredictorError;
use crate::predictor::BedtimePredictor;
use betterrest_domain::{
    CaffeineIntake, ClockStyle, PredictedBedtime, SleepGoal, SleepModel, Step, WakeUpTime,
};
use chrono::NaiveTime;
use tracing::warn;

/// Title of the notice shown when a prediction fails
pub const NOTICE_TITLE: &str = "Error occured";

/// Message of the notice shown when a prediction fails
pub const NOTICE_MESSAGE: &str = "Something went wrong with AI. Please, try again.";

/// Fixed user-facing notice for a failed prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    /// Notice title
    pub title: &'static str,
    /// Notice body
    pub message: &'static str,
}

impl Notice {
    /// The notice for any inference failure
    pub fn inference_failure() -> Self {
        Self {
            title: NOTICE_TITLE,
            message: NOTICE_MESSAGE,
        }
    }
}

/// Result of an input change
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A new bedtime was computed and is now displayed
    Updated(PredictedBedtime),

    /// The computation failed; the previous bedtime is still displayed
    Failed(Notice),

    /// The value did not change, nothing was computed
    Unchanged,
}

/// The three user inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormInputs {
    /// Wake-up time
    pub wake_up: WakeUpTime,
    /// Desired sleep
    pub sleep_goal: SleepGoal,
    /// Daily coffee
    pub coffee: CaffeineIntake,
}

/// Single-screen bedtime calculator state
pub struct BedtimeForm<M>
where
    M: SleepModel,
{
    predictor: BedtimePredictor<M>,
    inputs: FormInputs,
    bedtime: Option<PredictedBedtime>,
    notice: Option<Notice>,
}

impl<M> BedtimeForm<M>
where
    M: SleepModel,
    M::Error: std::fmt::Display,
{
    /// Create a form with the default inputs (07:00, 8 hours, 1 cup)
    pub fn new(predictor: BedtimePredictor<M>) -> Self {
        Self::with_inputs(predictor, FormInputs::default())
    }

    /// Create a form with specific starting inputs
    ///
    /// Nothing is computed until the first change or [`refresh`](Self::refresh).
    pub fn with_inputs(predictor: BedtimePredictor<M>, inputs: FormInputs) -> Self {
        Self {
            predictor,
            inputs,
            bedtime: None,
            notice: None,
        }
    }

    /// Current inputs
    pub fn inputs(&self) -> FormInputs {
        self.inputs
    }

    /// Last successfully computed bedtime, if any
    pub fn bedtime(&self) -> Option<&PredictedBedtime> {
        self.bedtime.as_ref()
    }

    /// Time shown on screen: the last bedtime, or 23:00 before the first one
    pub fn displayed_time(&self) -> NaiveTime {
        match &self.bedtime {
            Some(bedtime) => bedtime.time(),
            None => NaiveTime::from_hms_opt(23, 0, 0).unwrap_or(NaiveTime::MIN),
        }
    }

    /// Displayed time as short text
    pub fn displayed_text(&self, style: ClockStyle) -> String {
        style.format(self.displayed_time())
    }

    /// Pending notice, if the last computation failed and it was not dismissed
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Acknowledge the pending notice
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Change the wake-up time
    pub fn set_wake_up(&mut self, wake_up: WakeUpTime) -> Outcome {
        if self.inputs.wake_up == wake_up {
            return Outcome::Unchanged;
        }
        self.inputs.wake_up = wake_up;
        self.recompute()
    }

    /// Change the sleep goal
    pub fn set_sleep_goal(&mut self, sleep_goal: SleepGoal) -> Outcome {
        if self.inputs.sleep_goal == sleep_goal {
            return Outcome::Unchanged;
        }
        self.inputs.sleep_goal = sleep_goal;
        self.recompute()
    }

    /// Change the coffee intake
    pub fn set_coffee(&mut self, coffee: CaffeineIntake) -> Outcome {
        if self.inputs.coffee == coffee {
            return Outcome::Unchanged;
        }
        self.inputs.coffee = coffee;
        self.recompute()
    }

    /// Press the sleep-goal stepper
    pub fn step_sleep_goal(&mut self, step: Step) -> Outcome {
        self.set_sleep_goal(self.inputs.sleep_goal.step(step))
    }

    /// Press the coffee stepper
    pub fn step_coffee(&mut self, step: Step) -> Outcome {
        self.set_coffee(self.inputs.coffee.step(step))
    }

    /// Recompute with the current inputs regardless of changes
    pub fn refresh(&mut self) -> Outcome {
        self.recompute()
    }

    /// Run the predictor directly, without touching the displayed state
    pub fn predict(&self) -> Result<PredictedBedtime, PredictorError> {
        self.predictor.predict(
            self.inputs.wake_up,
            self.inputs.sleep_goal,
            self.inputs.coffee,
        )
    }

    fn recompute(&mut self) -> Outcome {
        match self.predict() {
            Ok(bedtime) => {
                self.bedtime = Some(bedtime);
                Outcome::Updated(bedtime)
            }
            Err(e) => {
                warn!("Bedtime prediction failed: {}", e);
                let notice = Notice::inference_failure();
                self.notice = Some(notice);
                Outcome::Failed(notice)
            }
        }
    }
}
