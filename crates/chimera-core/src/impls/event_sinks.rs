//! EventSink 実装
//!
//! - **TracingEventSink**: tracing にログ出力（承認は info、エスカレーションは info、却下は warn）
//! - **MemoryEventSink**: 受け取ったイベントを保持（テスト・観測用）

use std::sync::Mutex;

use crate::domain::{DomainEvent, TaskEventKind};
use crate::ports::EventSink;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: &DomainEvent) {
        match event {
            DomainEvent::CampaignStarted { campaign_id, title } => {
                tracing::info!(%campaign_id, %title, "starting campaign");
            }
            DomainEvent::PlanGenerated {
                campaign_id,
                task_count,
            } => {
                tracing::info!(%campaign_id, task_count, "generated plan");
            }
            DomainEvent::TaskValidated {
                campaign_id,
                task_id,
                capability,
                status,
                feedback,
            } => {
                let feedback = feedback.as_deref().unwrap_or("");
                match TaskEventKind::from(*status) {
                    TaskEventKind::Approved => {
                        tracing::info!(%campaign_id, %task_id, %capability, "task completed and approved");
                    }
                    TaskEventKind::Escalated => {
                        tracing::info!(%campaign_id, %task_id, %capability, %feedback, "task escalated to human review");
                    }
                    TaskEventKind::Rejected => {
                        tracing::warn!(%campaign_id, %task_id, %capability, %feedback, "task failed");
                    }
                    TaskEventKind::Untracked => {
                        tracing::debug!(%campaign_id, %task_id, %capability, %status, "task recorded");
                    }
                }
            }
            DomainEvent::CampaignFinished {
                campaign_id,
                completed,
                escalated,
                failed,
            } => {
                tracing::info!(%campaign_id, completed, escalated, failed, "campaign run finished");
            }
        }
    }
}

/// Keeps every emitted event in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemoryEventSink {
    events: Mutex<Vec<DomainEvent>>,
}

impl MemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl EventSink for MemoryEventSink {
    fn emit(&self, event: &DomainEvent) {
        let mut events = match self.events.lock() {
            Ok(events) => events,
            Err(poisoned) => poisoned.into_inner(),
        };
        events.push(event.clone());
    }
}
