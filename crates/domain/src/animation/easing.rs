//! Easing curves.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Maps an elapsed-time fraction to a progress fraction.
///
/// Every curve maps `0 → 0` and `1 → 1` and is monotonically non-decreasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseOutCubic,
    #[default]
    EaseOutQuart,
    EaseInOutCubic,
}

impl Easing {
    /// Evaluate the curve. `t` is clamped to `0..=1` first.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Self::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }

    /// Kebab-case name, as used in configuration files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseOutCubic => "ease-out-cubic",
            Self::EaseOutQuart => "ease-out-quart",
            Self::EaseInOutCubic => "ease-in-out-cubic",
        }
    }
}

impl FromStr for Easing {
    type Err = ValidationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "linear" => Ok(Self::Linear),
            "ease-out-cubic" => Ok(Self::EaseOutCubic),
            "ease-out-quart" => Ok(Self::EaseOutQuart),
            "ease-in-out-cubic" => Ok(Self::EaseInOutCubic),
            other => Err(ValidationError::UnknownEasing(other.to_string())),
        }
    }
}

impl std::fmt::Display for Easing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
