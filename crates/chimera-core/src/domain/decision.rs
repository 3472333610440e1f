//! Validation decision and the persisted result record.

use serde::{Deserialize, Serialize};

use super::ids::TaskId;
use super::status::TaskStatus;
use super::task::{CapabilityName, TaskResult};

/// The Validator's classification of one TaskResult.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationDecision {
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl ValidationDecision {
    pub fn new(status: TaskStatus, feedback: impl Into<String>) -> Self {
        Self {
            status,
            feedback: Some(feedback.into()),
        }
    }
}

/// Merged view of a task's result and its validation, as stored per campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub task_id: TaskId,
    pub capability: CapabilityName,
    pub status: TaskStatus,
    pub result: TaskResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl ResultRecord {
    pub fn merge(result: TaskResult, decision: ValidationDecision) -> Self {
        Self {
            task_id: result.task_id,
            capability: result.capability.clone(),
            status: decision.status,
            result,
            feedback: decision.feedback,
        }
    }
}
