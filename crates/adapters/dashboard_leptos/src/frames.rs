//! Browser frame source and clock for the counter animation.

use flowboard_app::ports::{Clock, FrameCallback, FrameError, FrameScheduler};
use flowboard_domain::time::FrameTime;
use leptos::leptos_dom::helpers::{AnimationFrameRequestHandle, request_animation_frame_with_handle};
use wasm_bindgen::JsValue;

/// Runs frame callbacks on `requestAnimationFrame`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RafScheduler;

impl FrameScheduler for RafScheduler {
    type Handle = AnimationFrameRequestHandle;

    fn request_frame(&self, callback: FrameCallback) -> Result<Self::Handle, FrameError> {
        request_animation_frame_with_handle(callback)
            .map_err(|err: JsValue| FrameError::Unavailable(format!("{err:?}")))
    }

    fn cancel_frame(&self, handle: Self::Handle) {
        handle.cancel();
    }
}

/// Reads `performance.now()`.
#[derive(Debug, Clone)]
pub struct PerformanceClock {
    performance: web_sys::Performance,
}

impl PerformanceClock {
    /// `None` outside a window context or when the Performance API is missing.
    pub fn new() -> Option<Self> {
        let performance = web_sys::window()?.performance()?;
        Some(Self { performance })
    }
}

impl Clock for PerformanceClock {
    fn now(&self) -> FrameTime {
        FrameTime::from_millis_f64(self.performance.now())
    }
}
