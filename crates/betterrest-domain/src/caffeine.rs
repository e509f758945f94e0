//! Caffeine intake module

use crate::{InputError, Step};

/// Daily coffee intake in cups, always within [1, 10]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CaffeineIntake(u8);

impl CaffeineIntake {
    /// Fewest cups accepted
    pub const MIN: u8 = 1;
    /// Most cups accepted
    pub const MAX: u8 = 10;

    /// Create an intake value, rejecting counts outside [1, 10]
    pub fn new(cups: u8) -> Result<Self, InputError> {
        if (Self::MIN..=Self::MAX).contains(&cups) {
            Ok(Self(cups))
        } else {
            Err(InputError::CaffeineOutOfRange(cups))
        }
    }

    /// Number of cups
    pub fn cups(&self) -> u8 {
        self.0
    }

    /// Cups as the floating value fed to the model
    pub fn as_feature(&self) -> f64 {
        f64::from(self.0)
    }

    /// Move one cup up or down, saturating at the bounds
    pub fn step(self, step: Step) -> Self {
        Self(step.apply(self.0, Self::MIN, Self::MAX))
    }

    /// Stepper label: `1 cup` or `N cups`
    pub fn label(&self) -> String {
        if self.0 == 1 {
            "1 cup".to_string()
        } else {
            format!("{} cups", self.0)
        }
    }
}

impl Default for CaffeineIntake {
    fn default() -> Self {
        Self(1)
    }
}

impl std::str::FromStr for CaffeineIntake {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cups: u8 = s
            .trim()
            .parse()
            .map_err(|_| InputError::InvalidNumber(s.to_string()))?;
        Self::new(cups)
    }
}
