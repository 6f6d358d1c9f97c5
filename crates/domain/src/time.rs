//! Monotonic frame timestamps.

use std::ops::Add;
use std::time::Duration;

/// A reading of a monotonic clock, measured from an arbitrary origin.
///
/// Only the difference between two readings of the same clock is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FrameTime(Duration);

impl FrameTime {
    /// The clock origin.
    pub const ZERO: Self = Self(Duration::ZERO);

    /// Wrap an offset from the clock origin.
    #[must_use]
    pub const fn from_duration(offset: Duration) -> Self {
        Self(offset)
    }

    /// Build a timestamp from whole milliseconds.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    /// Build a timestamp from fractional milliseconds, as returned by
    /// `performance.now()` in browsers.
    ///
    /// Negative or non-finite readings collapse to [`FrameTime::ZERO`].
    #[must_use]
    pub fn from_millis_f64(millis: f64) -> Self {
        if !millis.is_finite() || millis <= 0.0 {
            return Self::ZERO;
        }
        Self(Duration::try_from_secs_f64(millis / 1000.0).unwrap_or(Duration::MAX))
    }

    /// Offset from the clock origin.
    #[must_use]
    pub const fn as_duration(self) -> Duration {
        self.0
    }

    /// Time elapsed since `earlier`, or zero if `earlier` is in the future.
    #[must_use]
    pub fn saturating_since(self, earlier: Self) -> Duration {
        self.0.saturating_sub(earlier.0)
    }
}

impl Add<Duration> for FrameTime {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        Self(self.0.saturating_add(rhs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_measure_elapsed_time_between_readings() {
        let start = FrameTime::from_millis(100);
        let end = FrameTime::from_millis(350);
        assert_eq!(end.saturating_since(start), Duration::from_millis(250));
    }

    #[test]
    fn should_saturate_when_earlier_reading_is_later() {
        let start = FrameTime::from_millis(500);
        let end = FrameTime::from_millis(100);
        assert_eq!(end.saturating_since(start), Duration::ZERO);
    }

    #[test]
    fn should_convert_performance_now_readings() {
        let ts = FrameTime::from_millis_f64(1_250.0);
        assert_eq!(ts.as_duration(), Duration::from_millis(1_250));
    }

    #[test]
    fn should_collapse_invalid_readings_to_zero() {
        assert_eq!(FrameTime::from_millis_f64(-3.0), FrameTime::ZERO);
        assert_eq!(FrameTime::from_millis_f64(f64::NAN), FrameTime::ZERO);
        assert_eq!(FrameTime::from_millis_f64(f64::INFINITY), FrameTime::ZERO);
    }

    #[test]
    fn should_advance_by_duration() {
        let ts = FrameTime::from_millis(10) + Duration::from_millis(6);
        assert_eq!(ts, FrameTime::from_millis(16));
    }
}
