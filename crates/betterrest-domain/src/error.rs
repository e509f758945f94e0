//! Input validation errors

use std::fmt;

/// Rejected user input
///
/// Raised by the value constructors when a value falls outside the range the
/// input controls allow. The predictor itself never sees these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Text that is not a recognisable time of day
    InvalidTime(String),

    /// Text that is not a whole number
    InvalidNumber(String),

    /// Sleep goal outside [2, 12] hours
    SleepGoalOutOfRange(u8),

    /// Coffee cups outside [1, 10]
    CaffeineOutOfRange(u8),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidTime(s) => {
                write!(f, "Invalid time '{}': expected HH:MM or H:MM AM/PM", s)
            }
            InputError::InvalidNumber(s) => write!(f, "Invalid number '{}'", s),
            InputError::SleepGoalOutOfRange(h) => write!(
                f,
                "Sleep goal {} is out of range ({}-{} hours)",
                h,
                crate::SleepGoal::MIN,
                crate::SleepGoal::MAX
            ),
            InputError::CaffeineOutOfRange(c) => write!(
                f,
                "Coffee intake {} is out of range ({}-{} cups)",
                c,
                crate::CaffeineIntake::MIN,
                crate::CaffeineIntake::MAX
            ),
        }
    }
}

impl std::error::Error for InputError {}
