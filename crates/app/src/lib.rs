//! # flowboard-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `Clock`: monotonic time source sampled on every frame
//!   - `FrameScheduler`: the host's "run this before the next repaint" primitive
//! - Define the **`CounterDriver`** use-case: runs a domain counter animation on
//!   any frame scheduler, cancelling superseded and orphaned callbacks
//! - Provide **in-process infrastructure** that needs no host:
//!   - `manual`: a hand-pumped scheduler and clock for tests and offline rendering
//!   - `tokio_frames`: a tokio `LocalSet` scheduler for native binaries
//!     (behind the `tokio` feature)
//!
//! ## Dependency rule
//! Depends on `flowboard-domain` only (plus `tokio` for the native scheduler).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod manual;
pub mod ports;
pub mod services;
#[cfg(feature = "tokio")]
pub mod tokio_frames;
