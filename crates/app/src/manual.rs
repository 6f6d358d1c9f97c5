//! Hand-pumped frame scheduler and clock.
//!
//! Nothing happens until the owner calls [`ManualFrameScheduler::run_frame`]
//! or moves the [`ManualClock`]. Clones share state, so a test can hand one
//! clone to a driver and keep another to step it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use flowboard_domain::time::FrameTime;

use crate::ports::{Clock, FrameCallback, FrameError, FrameScheduler};

/// Handle of a callback queued on a [`ManualFrameScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(u64);

#[derive(Default)]
struct FrameQueue {
    next_id: u64,
    closed: bool,
    callbacks: Vec<(FrameId, FrameCallback)>,
}

/// Frame scheduler whose frames run only when asked to.
#[derive(Clone, Default)]
pub struct ManualFrameScheduler {
    queue: Rc<RefCell<FrameQueue>>,
}

impl ManualFrameScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks waiting for the next frame.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().callbacks.len()
    }

    /// Run every callback queued so far and return how many ran.
    ///
    /// Callbacks requested while this frame runs wait for the next call.
    pub fn run_frame(&self) -> usize {
        let due = std::mem::take(&mut self.queue.borrow_mut().callbacks);
        let count = due.len();
        for (_, callback) in due {
            callback();
        }
        count
    }

    /// Refuse every future request, as a host without a frame source would.
    pub fn close(&self) {
        self.queue.borrow_mut().closed = true;
    }
}

impl FrameScheduler for ManualFrameScheduler {
    type Handle = FrameId;

    fn request_frame(&self, callback: FrameCallback) -> Result<FrameId, FrameError> {
        let mut queue = self.queue.borrow_mut();
        if queue.closed {
            return Err(FrameError::Unavailable(
                "manual scheduler closed".to_string(),
            ));
        }
        let id = FrameId(queue.next_id);
        queue.next_id += 1;
        queue.callbacks.push((id, callback));
        Ok(id)
    }

    fn cancel_frame(&self, handle: FrameId) {
        self.queue
            .borrow_mut()
            .callbacks
            .retain(|(id, _)| *id != handle);
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<FrameTime>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Jump to an absolute reading.
    pub fn set(&self, now: FrameTime) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> FrameTime {
        self.now.get()
    }
}
