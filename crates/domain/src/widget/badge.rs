//! Status badge.

use serde::{Deserialize, Serialize};

use crate::status::WorkflowStatus;

const BADGE_BASE_CLASS: &str =
    "inline-flex items-center gap-1.5 px-2.5 py-0.5 rounded-full text-xs font-medium";
const DOT_BASE_CLASS: &str = "w-1.5 h-1.5 rounded-full";
const PULSE_CLASS: &str = "animate-pulse";

/// Inputs of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBadgeProps {
    pub status: WorkflowStatus,
    #[serde(default = "default_show_dot")]
    pub show_dot: bool,
}

const fn default_show_dot() -> bool {
    true
}

/// The leading indicator dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotView {
    pub class: String,
    pub pulsing: bool,
}

/// Everything needed to draw a badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeView {
    pub label: &'static str,
    pub class: String,
    pub dot: Option<DotView>,
}

impl StatusBadgeProps {
    /// Badge for `status`, dot shown.
    #[must_use]
    pub const fn new(status: WorkflowStatus) -> Self {
        Self {
            status,
            show_dot: true,
        }
    }

    #[must_use]
    pub const fn with_dot(mut self, show_dot: bool) -> Self {
        self.show_dot = show_dot;
        self
    }

    /// Derive label, classes and dot.
    #[must_use]
    pub fn view(&self) -> BadgeView {
        let presentation = self.status.presentation();
        let tone = presentation.tone;
        let class = format!(
            "{BADGE_BASE_CLASS} {} {}",
            tone.soft_background(),
            tone.text()
        );
        let dot = self.show_dot.then(|| {
            let mut class = format!("{DOT_BASE_CLASS} {}", tone.solid());
            if presentation.pulsing {
                class.push(' ');
                class.push_str(PULSE_CLASS);
            }
            DotView {
                class,
                pulsing: presentation.pulsing,
            }
        });
        BadgeView {
            label: presentation.label,
            class,
            dot,
        }
    }
}

impl From<WorkflowStatus> for StatusBadgeProps {
    fn from(status: WorkflowStatus) -> Self {
        Self::new(status)
    }
}
