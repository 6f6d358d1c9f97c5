//! Animation timing settings.

use std::time::Duration;

use crate::error::{FlowboardError, ValidationError};

use super::Easing;

/// Total run time and easing curve of a counter animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSettings {
    duration: Duration,
    easing: Easing,
}

impl AnimationSettings {
    /// Duration used when none is configured.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(1000);

    /// Create a builder for constructing [`AnimationSettings`].
    #[must_use]
    pub fn builder() -> AnimationSettingsBuilder {
        AnimationSettingsBuilder::default()
    }

    /// How long a run takes from start to settle.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Curve applied to the elapsed fraction.
    #[must_use]
    pub const fn easing(&self) -> Easing {
        self.easing
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FlowboardError::Validation`] when the duration is zero.
    pub fn validate(&self) -> Result<(), FlowboardError> {
        if self.duration.is_zero() {
            return Err(ValidationError::ZeroDuration.into());
        }
        Ok(())
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            duration: Self::DEFAULT_DURATION,
            easing: Easing::default(),
        }
    }
}

/// Step-by-step builder for [`AnimationSettings`].
#[derive(Debug, Default)]
pub struct AnimationSettingsBuilder {
    duration: Option<Duration>,
    easing: Option<Easing>,
}

impl AnimationSettingsBuilder {
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    /// Consume the builder, validate, and return [`AnimationSettings`].
    ///
    /// # Errors
    ///
    /// Returns [`FlowboardError::Validation`] if the duration is zero.
    pub fn build(self) -> Result<AnimationSettings, FlowboardError> {
        let settings = AnimationSettings {
            duration: self
                .duration
                .unwrap_or(AnimationSettings::DEFAULT_DURATION),
            easing: self.easing.unwrap_or_default(),
        };
        settings.validate()?;
        Ok(settings)
    }
}
