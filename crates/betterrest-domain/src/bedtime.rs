//! Predicted bedtime and its display

use crate::{WakeUpTime, SECONDS_PER_DAY};
use chrono::{NaiveTime, TimeDelta, Timelike};
use std::fmt;

/// How a time of day is rendered for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClockStyle {
    /// `10:45 PM`
    #[default]
    TwelveHour,

    /// `22:45`
    TwentyFourHour,
}

impl ClockStyle {
    /// Get the style name as used in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            ClockStyle::TwelveHour => "12h",
            ClockStyle::TwentyFourHour => "24h",
        }
    }

    /// Parse a clock style from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "12h" | "12" => Some(ClockStyle::TwelveHour),
            "24h" | "24" => Some(ClockStyle::TwentyFourHour),
            _ => None,
        }
    }

    /// Render a time of day as short time text (no date, no seconds)
    pub fn format(&self, time: NaiveTime) -> String {
        match self {
            ClockStyle::TwelveHour => time.format("%-I:%M %p").to_string(),
            ClockStyle::TwentyFourHour => time.format("%H:%M").to_string(),
        }
    }
}

impl std::str::FromStr for ClockStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid clock style: {}", s))
    }
}

/// Recommended bedtime
///
/// The wake-up time minus the model's predicted actual sleep, wrapped around
/// midnight. The predicted duration is kept alongside so callers can check
/// the offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictedBedtime {
    time: NaiveTime,
    sleep_seconds: f64,
}

impl PredictedBedtime {
    /// Subtract `sleep_seconds` from the wake-up time
    ///
    /// The subtraction is done at whole-second precision and wraps to the
    /// previous day when it crosses midnight.
    pub fn before(wake_up: WakeUpTime, sleep_seconds: f64) -> Self {
        let whole = (sleep_seconds.round() as i64).rem_euclid(i64::from(SECONDS_PER_DAY));
        let (time, _) = wake_up
            .as_time()
            .overflowing_sub_signed(TimeDelta::seconds(whole));

        Self {
            time,
            sleep_seconds,
        }
    }

    /// Bedtime as a time of day
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Predicted actual sleep in seconds
    pub fn sleep_seconds(&self) -> f64 {
        self.sleep_seconds
    }

    /// Predicted actual sleep in hours
    pub fn sleep_hours(&self) -> f64 {
        self.sleep_seconds / 3600.0
    }

    /// Seconds from this bedtime forward to `wake_up`, in `[0, 86400)`
    pub fn seconds_until(&self, wake_up: WakeUpTime) -> u32 {
        let day = i64::from(SECONDS_PER_DAY);
        let wake = i64::from(wake_up.as_time().num_seconds_from_midnight());
        let bed = i64::from(self.time.num_seconds_from_midnight());
        (wake - bed).rem_euclid(day) as u32
    }

    /// Short display text in the given clock style
    pub fn format(&self, style: ClockStyle) -> String {
        style.format(self.time)
    }
}

impl fmt::Display for PredictedBedtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ClockStyle::TwentyFourHour.format(self.time))
    }
}
