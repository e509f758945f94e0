//! Wake-up time module

use crate::{ClockStyle, InputError};
use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Formats accepted when parsing a wake-up time from text
const PARSE_FORMATS: &[&str] = &["%H:%M", "%I:%M %p", "%I:%M%p"];

/// Target time to wake up
///
/// A time of day with minute precision. There is no date: only the minutes
/// since midnight matter, so seconds are dropped on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WakeUpTime(NaiveTime);

impl WakeUpTime {
    /// Create a wake-up time from hour (0-23) and minute (0-59)
    pub fn new(hour: u32, minute: u32) -> Result<Self, InputError> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| InputError::InvalidTime(format!("{}:{:02}", hour, minute)))
    }

    /// Create a wake-up time from any time of day, truncating to the minute
    pub fn from_time(time: NaiveTime) -> Self {
        let truncated =
            NaiveTime::from_num_seconds_from_midnight_opt(time.hour() * 3600 + time.minute() * 60, 0)
                .unwrap_or(time);
        Self(truncated)
    }

    /// Hour of day (0-23)
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Minute of hour (0-59)
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Total seconds since midnight, the `wake` model feature
    pub fn seconds_since_midnight(&self) -> f64 {
        f64::from(self.hour() * 3600 + self.minute() * 60)
    }

    /// The underlying time of day
    pub fn as_time(&self) -> NaiveTime {
        self.0
    }

    /// Short display text in the given clock style
    pub fn format(&self, style: ClockStyle) -> String {
        style.format(self.0)
    }
}

impl Default for WakeUpTime {
    fn default() -> Self {
        Self(NaiveTime::from_hms_opt(7, 0, 0).unwrap_or(NaiveTime::MIN))
    }
}

impl std::str::FromStr for WakeUpTime {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        PARSE_FORMATS
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(trimmed, fmt).ok())
            .map(Self::from_time)
            .ok_or_else(|| InputError::InvalidTime(s.to_string()))
    }
}

impl fmt::Display for WakeUpTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
