//! Task and campaign status enums.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a task within one campaign run.
///
/// The Validator assigns exactly one of the terminal values per task and the
/// task is never reclassified in the same run. `Pending` and `Processing` are
/// reserved for pre-execution and in-flight bookkeeping.
///
/// Serialized as SCREAMING_SNAKE_CASE: PENDING / PROCESSING / COMPLETED /
/// FAILED / ESC_HITL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Pending,
    Processing,
    /// Accepted.
    Completed,
    /// Rejected.
    Failed,
    /// Escalated to human review.
    EscHitl,
}

impl TaskStatus {
    /// Is this a terminal-for-this-run classification?
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            TaskStatus::Completed | TaskStatus::Failed | TaskStatus::EscHitl
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "PENDING",
            TaskStatus::Processing => "PROCESSING",
            TaskStatus::Completed => "COMPLETED",
            TaskStatus::Failed => "FAILED",
            TaskStatus::EscHitl => "ESC_HITL",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Campaign lifecycle status.
///
/// Only `Planning` is assigned by this crate (at creation). Transitions to the
/// other values belong to an external supervisor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    #[default]
    Planning,
    Active,
    Paused,
    Completed,
}
