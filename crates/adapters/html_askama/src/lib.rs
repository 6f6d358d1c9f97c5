//! # flowboard-adapter-html
//!
//! Renders flowboard widgets to HTML strings with `askama` templates.
//!
//! ## Responsibilities
//! - Turn domain view models into markup (`templates/*.html`)
//! - Resolve a stats card's icon: injected markup or the vector glyph
//!
//! ## Dependency rule
//! Depends on `flowboard-domain` only. Rendering is a snapshot: the caller
//! decides which counter value a card shows.

pub mod error;
pub mod stats_card;
pub mod status_badge;

pub use error::RenderError;
pub use stats_card::render_stats_card;
pub use status_badge::render_status_badge;
