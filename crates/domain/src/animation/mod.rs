//! Counter animation: the tween behind a stats card's displayed value.
//!
//! A [`CounterAnimation`] is a pure state machine: it never reads a clock and
//! never schedules anything. The caller feeds it [`FrameTime`](crate::time::FrameTime)
//! samples and reads back the value to display. Driving it from a real frame
//! source is the job of the `app` layer.

mod counter;
mod easing;
mod settings;

pub use counter::{CounterAnimation, CounterFrame, CounterPhase, Generation};
pub use easing::Easing;
pub use settings::{AnimationSettings, AnimationSettingsBuilder};
