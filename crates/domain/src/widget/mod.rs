//! Widget props and the view models derived from them.
//!
//! View models hold nothing but strings and flags, so every renderer (server
//! templates, client components) produces the same classes and text.

mod badge;
mod stats_card;

pub use badge::{BadgeView, DotView, StatusBadgeProps};
pub use stats_card::{ProgressView, StatsCardBuilder, StatsCardProps, StatsCardView};
