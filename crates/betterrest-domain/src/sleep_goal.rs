//! Sleep goal module

use crate::{InputError, Step};

/// Desired amount of sleep in whole hours
///
/// Always within [`SleepGoal::MIN`, `SleepGoal::MAX`]; the stepper moves one
/// hour at a time and stops at the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SleepGoal(u8);

impl SleepGoal {
    /// Smallest accepted goal (hours)
    pub const MIN: u8 = 2;
    /// Largest accepted goal (hours)
    pub const MAX: u8 = 12;

    /// Create a sleep goal, rejecting values outside [2, 12]
    pub fn new(hours: u8) -> Result<Self, InputError> {
        if (Self::MIN..=Self::MAX).contains(&hours) {
            Ok(Self(hours))
        } else {
            Err(InputError::SleepGoalOutOfRange(hours))
        }
    }

    /// Whole hours
    pub fn get(&self) -> u8 {
        self.0
    }

    /// Hours as the floating value fed to the model
    pub fn hours(&self) -> f64 {
        f64::from(self.0)
    }

    /// Move one hour up or down, saturating at the bounds
    pub fn step(self, step: Step) -> Self {
        Self(step.apply(self.0, Self::MIN, Self::MAX))
    }

    /// Stepper label, e.g. `8 hours`
    pub fn label(&self) -> String {
        format!("{} hours", self.0)
    }
}

impl Default for SleepGoal {
    fn default() -> Self {
        Self(8)
    }
}

impl std::str::FromStr for SleepGoal {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('h');
        let hours: u8 = trimmed
            .parse()
            .map_err(|_| InputError::InvalidNumber(s.to_string()))?;
        Self::new(hours)
    }
}
