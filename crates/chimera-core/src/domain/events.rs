//! Events - ドメインイベント
//!
//! Orchestrator が EventSink に送る監視用イベント。制御フローには影響しない。

use serde::{Deserialize, Serialize};

use super::ids::{CampaignId, TaskId};
use super::status::TaskStatus;
use super::task::CapabilityName;

/// Monitoring view of a validated task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskEventKind {
    Approved,
    Escalated,
    Rejected,
    /// Status not produced by validation (PENDING / PROCESSING).
    Untracked,
}

impl From<TaskStatus> for TaskEventKind {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Completed => TaskEventKind::Approved,
            TaskStatus::EscHitl => TaskEventKind::Escalated,
            TaskStatus::Failed => TaskEventKind::Rejected,
            TaskStatus::Pending | TaskStatus::Processing => TaskEventKind::Untracked,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DomainEvent {
    CampaignStarted {
        campaign_id: CampaignId,
        title: String,
    },
    PlanGenerated {
        campaign_id: CampaignId,
        task_count: usize,
    },
    TaskValidated {
        campaign_id: CampaignId,
        task_id: TaskId,
        capability: CapabilityName,
        status: TaskStatus,
        feedback: Option<String>,
    },
    CampaignFinished {
        campaign_id: CampaignId,
        completed: usize,
        escalated: usize,
        failed: usize,
    },
}

impl DomainEvent {
    pub fn campaign_id(&self) -> CampaignId {
        match self {
            DomainEvent::CampaignStarted { campaign_id, .. }
            | DomainEvent::PlanGenerated { campaign_id, .. }
            | DomainEvent::TaskValidated { campaign_id, .. }
            | DomainEvent::CampaignFinished { campaign_id, .. } => *campaign_id,
        }
    }
}
