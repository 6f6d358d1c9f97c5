//! # flowboard-domain
//!
//! Pure presentation model for the flowboard workflow dashboard widgets.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, monotonic frame timestamps
//! - Map **workflow status codes** to badge labels and style tokens
//! - Map **card variants** to color tokens through a shared [`tone::Tone`] palette
//! - Model **progress percentages**, **icons** and **value formatting**
//! - Model the **counter animation** as an explicit `Idle → Running → Settled`
//!   state machine with easing curves and generation tokens
//! - Derive the **view models** that renderers turn into markup
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Frame scheduling and clocks are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod animation;
pub mod format;
pub mod icon;
pub mod progress;
pub mod status;
pub mod tone;
pub mod variant;
pub mod widget;
