mod stats_card;
mod status_badge;

pub use stats_card::{CardIcon, StatsCard};
pub use status_badge::StatusBadge;
