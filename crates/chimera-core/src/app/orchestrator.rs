//! Orchestrator - campaign の制御ループ
//!
//! # フロー
//! 1. StateStore::save_campaign() で campaign を永続化
//! 2. Planner::create_plan() で plan を取得
//! 3. plan の順に 1 タスクずつ:
//!    Executor::execute() → Validator::validate() → StateStore::save_task_result()
//! 4. 全 ResultRecord を plan 順で返す
//!
//! FAILED でも ESC_HITL でもループは止まらない（停止・一時停止は外部の supervisor の責務）。
//! StateStore の失敗だけが `SwarmError::Store` として呼び出し元に伝播する。

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::executor::Executor;
use crate::domain::{
    Campaign, DomainEvent, ResultRecord, SwarmError, TaskRequest, TaskStatus,
};
use crate::ports::{EventSink, Planner, StateStore, Validator};

/// Component wiring as reported by `Orchestrator::health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub components: BTreeMap<String, bool>,
    pub capabilities: Vec<String>,
    pub confidence_threshold: f64,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.components.values().all(|ok| *ok)
    }
}

/// Drives campaigns through plan → execute → validate → persist.
///
/// `run` takes `&self`, so one orchestrator can serve several campaigns
/// concurrently; each run only touches its own campaign id in the store.
pub struct Orchestrator {
    planner: Arc<dyn Planner>,
    executor: Executor,
    validator: Arc<dyn Validator>,
    store: Arc<dyn StateStore>,
    events: Arc<dyn EventSink>,
}

impl Orchestrator {
    pub fn new(
        planner: Arc<dyn Planner>,
        executor: Executor,
        validator: Arc<dyn Validator>,
        store: Arc<dyn StateStore>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            planner,
            executor,
            validator,
            store,
            events,
        }
    }

    pub fn store(&self) -> &Arc<dyn StateStore> {
        &self.store
    }

    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Run one campaign end to end and return its records in plan order.
    pub async fn run(&self, campaign: &Campaign) -> Result<Vec<ResultRecord>, SwarmError> {
        self.store.save_campaign(campaign).await?;
        self.events.emit(&DomainEvent::CampaignStarted {
            campaign_id: campaign.id,
            title: campaign.title.clone(),
        });

        let plan = self.planner.create_plan(campaign).await;
        self.execute_plan(campaign, plan).await
    }

    /// Regenerate a plan from feedback. Not used by `run`; meant for an
    /// external retry / review flow, followed by `run_plan`.
    pub async fn replan(&self, campaign: &Campaign, feedback: &str) -> Vec<TaskRequest> {
        self.planner.replan(campaign, feedback).await
    }

    /// Run an externally supplied plan with the same per-task semantics as `run`.
    pub async fn run_plan(
        &self,
        campaign: &Campaign,
        plan: Vec<TaskRequest>,
    ) -> Result<Vec<ResultRecord>, SwarmError> {
        self.store.save_campaign(campaign).await?;
        self.events.emit(&DomainEvent::CampaignStarted {
            campaign_id: campaign.id,
            title: campaign.title.clone(),
        });
        self.execute_plan(campaign, plan).await
    }

    async fn execute_plan(
        &self,
        campaign: &Campaign,
        plan: Vec<TaskRequest>,
    ) -> Result<Vec<ResultRecord>, SwarmError> {
        self.events.emit(&DomainEvent::PlanGenerated {
            campaign_id: campaign.id,
            task_count: plan.len(),
        });

        let mut records = Vec::with_capacity(plan.len());
        for request in &plan {
            tracing::debug!(campaign_id = %campaign.id, task_id = %request.task_id(), capability = %request.capability(), "executing task");

            let result = self.executor.execute(request).await;
            let decision = self.validator.validate(&result);
            let record = ResultRecord::merge(result, decision);

            self.store
                .save_task_result(campaign.id, record.clone())
                .await?;

            self.events.emit(&DomainEvent::TaskValidated {
                campaign_id: campaign.id,
                task_id: record.task_id,
                capability: record.capability.clone(),
                status: record.status,
                feedback: record.feedback.clone(),
            });
            records.push(record);
        }

        let count = |status: TaskStatus| records.iter().filter(|r| r.status == status).count();
        self.events.emit(&DomainEvent::CampaignFinished {
            campaign_id: campaign.id,
            completed: count(TaskStatus::Completed),
            escalated: count(TaskStatus::EscHitl),
            failed: count(TaskStatus::Failed),
        });

        Ok(records)
    }

    /// Report which components are wired and what the executor can dispatch.
    pub fn health(&self) -> HealthReport {
        let registry = self.executor.registry();
        let components = BTreeMap::from([
            ("planner".to_string(), true),
            ("executor".to_string(), !registry.is_empty()),
            ("validator".to_string(), self.validator.threshold().is_finite()),
            ("state_store".to_string(), true),
        ]);
        HealthReport {
            components,
            capabilities: registry.names().iter().map(|n| n.to_string()).collect(),
            confidence_threshold: self.validator.threshold(),
        }
    }
}
