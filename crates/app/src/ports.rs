//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the host
//! environment (browser, tokio runtime, test harness).

pub mod clock;
pub mod frame_scheduler;

pub use clock::Clock;
pub use frame_scheduler::{FrameCallback, FrameError, FrameScheduler};
