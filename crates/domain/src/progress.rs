//! Progress percentage shown by a stats card's progress bar.

use serde::{Deserialize, Serialize};

/// A percentage clamped to `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Percent(f64);

impl Percent {
    /// Clamp `value` into `0..=100`. `NaN` becomes `0`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        // `+ 0.0` turns a negative zero into a positive one.
        Self(value.clamp(0.0, 100.0) + 0.0)
    }

    /// The clamped percentage.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Inline style that sizes a bar fill to this percentage.
    #[must_use]
    pub fn width_style(self) -> String {
        format!("width: {}%", self.0)
    }
}

impl From<f64> for Percent {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Percent> for f64 {
    fn from(percent: Percent) -> Self {
        percent.0
    }
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_whole_percentages_without_decimals() {
        assert_eq!(Percent::new(75.0).width_style(), "width: 75%");
    }

    #[test]
    fn should_keep_fractional_percentages() {
        assert_eq!(Percent::new(12.5).width_style(), "width: 12.5%");
    }

    #[test]
    fn should_clamp_out_of_range_values() {
        assert!((Percent::new(140.0).value() - 100.0).abs() < f64::EPSILON);
        assert!(Percent::new(-5.0).value().abs() < f64::EPSILON);
    }

    #[test]
    fn should_treat_nan_as_zero() {
        assert_eq!(Percent::new(f64::NAN).width_style(), "width: 0%");
    }

    #[test]
    fn should_clamp_when_deserializing() {
        let percent: Percent = serde_json::from_str("250").unwrap();
        assert_eq!(percent.to_string(), "100%");
    }
}
