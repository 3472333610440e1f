//! Planner port - campaign の goal を TaskRequest の列に分解
//!
//! 返す列の順序がそのまま実行順序になります（依存グラフではない）。

use async_trait::async_trait;

use crate::domain::{Campaign, TaskRequest};

/// Decomposes a campaign goal into an ordered plan.
///
/// Planning has no failure mode: a planner that cannot produce useful work
/// should return an explicitly degenerate plan rather than an error.
#[async_trait]
pub trait Planner: Send + Sync {
    async fn create_plan(&self, campaign: &Campaign) -> Vec<TaskRequest>;

    /// Regenerate a plan after feedback (e.g. from human review).
    ///
    /// Never called by the orchestrator's own loop.
    async fn replan(&self, campaign: &Campaign, feedback: &str) -> Vec<TaskRequest>;
}
