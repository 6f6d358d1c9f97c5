//! Native frame source backed by tokio timers.
//!
//! Frames are local tasks sleeping one frame interval. They are spawned on the
//! [`LocalSet`] the scheduler was built with, so requesting a frame never
//! depends on the calling context; the frames run while that set is driven.

use std::rc::Rc;
use std::time::Duration;

use flowboard_domain::time::FrameTime;
use tokio::task::{JoinHandle, LocalSet};
use tokio::time::Instant;

use crate::ports::{Clock, FrameCallback, FrameError, FrameScheduler};

/// Schedules frames on a `LocalSet` at a fixed interval.
#[derive(Debug, Clone)]
pub struct TokioFrameScheduler {
    tasks: Rc<LocalSet>,
    interval: Duration,
}

impl TokioFrameScheduler {
    /// Roughly sixty frames per second.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(16);

    /// Scheduler spawning its frames on `tasks`.
    #[must_use]
    pub fn new(tasks: Rc<LocalSet>, interval: Duration) -> Self {
        Self { tasks, interval }
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }
}

impl FrameScheduler for TokioFrameScheduler {
    type Handle = JoinHandle<()>;

    fn request_frame(&self, callback: FrameCallback) -> Result<Self::Handle, FrameError> {
        let interval = self.interval;
        Ok(self.tasks.spawn_local(async move {
            tokio::time::sleep(interval).await;
            callback();
        }))
    }

    fn cancel_frame(&self, handle: Self::Handle) {
        handle.abort();
    }
}

/// Monotonic clock on tokio's time source, so paused test time applies.
#[derive(Debug, Clone, Copy)]
pub struct TokioClock {
    origin: Instant,
}

impl TokioClock {
    /// Clock whose origin is the moment of creation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TokioClock {
    fn now(&self) -> FrameTime {
        FrameTime::from_duration(self.origin.elapsed())
    }
}
