//! Frame scheduler port: run a callback before the next repaint.

use std::rc::Rc;

/// Work to run on the next frame.
pub type FrameCallback = Box<dyn FnOnce() + 'static>;

/// The host could not register a frame callback.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// No frame source exists in this environment (e.g. no `window`).
    #[error("frame source unavailable: {0}")]
    Unavailable(String),
}

/// Schedules one-shot callbacks on the host's frame loop.
///
/// Implementations must never invoke a callback synchronously from
/// [`request_frame`](Self::request_frame); it always runs on a later turn.
pub trait FrameScheduler {
    /// Token returned by [`request_frame`](Self::request_frame), used to cancel.
    type Handle: 'static;

    /// Register `callback` to run on the next frame.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::Unavailable`] when the host has no frame source.
    fn request_frame(&self, callback: FrameCallback) -> Result<Self::Handle, FrameError>;

    /// Drop a pending callback. Cancelling a callback that already ran is a no-op.
    fn cancel_frame(&self, handle: Self::Handle);
}

impl<T: FrameScheduler + ?Sized> FrameScheduler for Rc<T> {
    type Handle = T::Handle;

    fn request_frame(&self, callback: FrameCallback) -> Result<Self::Handle, FrameError> {
        (**self).request_frame(callback)
    }

    fn cancel_frame(&self, handle: Self::Handle) {
        (**self).cancel_frame(handle);
    }
}
