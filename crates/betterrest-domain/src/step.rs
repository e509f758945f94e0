//! Stepper direction

/// Direction of a stepper control press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Increase by one step
    Up,

    /// Decrease by one step
    Down,
}

impl Step {
    /// Parse a stepper direction from `+`/`-` or `up`/`down`
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "+" | "up" | "inc" => Some(Step::Up),
            "-" | "down" | "dec" => Some(Step::Down),
            _ => None,
        }
    }

    /// Apply this step to `value`, saturating at `[min, max]`
    pub(crate) fn apply(self, value: u8, min: u8, max: u8) -> u8 {
        match self {
            Step::Up => value.saturating_add(1).min(max),
            Step::Down => value.saturating_sub(1).max(min),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_parse() {
        assert_eq!(Step::parse("+"), Some(Step::Up));
        assert_eq!(Step::parse("DOWN"), Some(Step::Down));
        assert_eq!(Step::parse("sideways"), None);
    }

    #[test]
    fn test_step_saturates() {
        assert_eq!(Step::Up.apply(10, 1, 10), 10);
        assert_eq!(Step::Down.apply(1, 1, 10), 1);
        assert_eq!(Step::Up.apply(4, 1, 10), 5);
    }
}
