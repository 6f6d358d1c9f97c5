//! Clock port: monotonic time source.

use std::rc::Rc;

use flowboard_domain::time::FrameTime;

/// Reads a monotonic clock.
///
/// Readings must never go backwards; the origin is arbitrary.
pub trait Clock {
    /// Current reading.
    fn now(&self) -> FrameTime;
}

impl<T: Clock + ?Sized> Clock for Rc<T> {
    fn now(&self) -> FrameTime {
        (**self).now()
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> FrameTime {
        (**self).now()
    }
}
