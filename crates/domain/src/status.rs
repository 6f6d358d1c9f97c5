//! Workflow status: the state keys a status badge presents.
//!
//! Parsing is total: any code that is not one of the seven known keys
//! resolves to [`WorkflowStatus::Pending`], so a badge can always render.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::tone::Tone;

/// Lifecycle state of a workflow execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum WorkflowStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Failed,
    RetryPending,
    Cancelled,
    Passed,
}

/// How a status is presented: label text, color tone and dot animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPresentation {
    pub label: &'static str,
    pub tone: Tone,
    pub pulsing: bool,
}

impl WorkflowStatus {
    /// Every recognized status, in lifecycle order.
    pub const ALL: [Self; 7] = [
        Self::Pending,
        Self::InProgress,
        Self::Completed,
        Self::Failed,
        Self::RetryPending,
        Self::Cancelled,
        Self::Passed,
    ];

    /// Resolve a wire code (`"IN_PROGRESS"`, …) to a status.
    ///
    /// Matching is exact; unrecognized codes fall back to [`Self::Pending`].
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "IN_PROGRESS" => Self::InProgress,
            "COMPLETED" => Self::Completed,
            "FAILED" => Self::Failed,
            "RETRY_PENDING" => Self::RetryPending,
            "CANCELLED" => Self::Cancelled,
            "PASSED" => Self::Passed,
            _ => Self::Pending,
        }
    }

    /// Canonical wire code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
            Self::RetryPending => "RETRY_PENDING",
            Self::Cancelled => "CANCELLED",
            Self::Passed => "PASSED",
        }
    }

    /// Label, tone and dot animation for this status.
    #[must_use]
    pub const fn presentation(self) -> StatusPresentation {
        let (label, tone) = match self {
            Self::Pending => ("Pending", Tone::Warning),
            Self::InProgress => ("In Progress", Tone::Info),
            Self::Completed => ("Completed", Tone::Success),
            Self::Failed => ("Failed", Tone::Danger),
            Self::RetryPending => ("Retry Pending", Tone::Warning),
            Self::Cancelled => ("Cancelled", Tone::Neutral),
            Self::Passed => ("Passed", Tone::Success),
        };
        StatusPresentation {
            label,
            tone,
            pulsing: matches!(self, Self::InProgress),
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.presentation().label
    }

    /// Whether the workflow can no longer change state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Completed | Self::Failed | Self::Cancelled | Self::Passed
        )
    }
}

impl From<&str> for WorkflowStatus {
    fn from(code: &str) -> Self {
        Self::from_code(code)
    }
}

impl From<String> for WorkflowStatus {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl FromStr for WorkflowStatus {
    type Err = Infallible;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_code(code))
    }
}

impl std::fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
