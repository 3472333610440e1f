//! OrchestratorBuilder - Orchestrator の構築とワイヤリング
//!
//! # Fail-fast 設計
//! - expect_capabilities() で期待される capability 名を登録
//! - build() 時に「期待集合 ⊆ 登録済み集合」をチェック
//! - 不足があれば BuildError を返す
//!
//! 未指定のコンポーネントは開発用のデフォルト実装で埋めます：
//! TemplatePlanner / ThresholdValidator / InMemoryStateStore / TracingEventSink

use std::sync::Arc;
use std::time::Duration;

use super::executor::Executor;
use super::orchestrator::Orchestrator;
use crate::config::SwarmConfig;
use crate::impls::{InMemoryStateStore, TemplatePlanner, ThresholdValidator, TracingEventSink};
use crate::ports::{Capability, EventSink, Planner, StateStore, SystemClock, UlidGenerator, Validator};
use crate::typed::{CapabilityRegistry, Skill};

/// OrchestratorBuilder は Orchestrator を構築
///
/// # 使用例
/// ```ignore
/// let orchestrator = OrchestratorBuilder::from_config(&config)
///     .registry(reference_registry())
///     .expect_capabilities(&["skill_trend_analysis"])
///     .build()?;
/// ```
#[derive(Default)]
pub struct OrchestratorBuilder {
    planner: Option<Arc<dyn Planner>>,
    validator: Option<Arc<dyn Validator>>,
    store: Option<Arc<dyn StateStore>>,
    events: Option<Arc<dyn EventSink>>,
    registry: CapabilityRegistry,
    capability_timeout: Option<Duration>,
    expected_capabilities: Option<Vec<String>>,
}

/// BuildError は Orchestrator 構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Missing capabilities: {0:?}. These capabilities were expected but not registered.")]
    MissingCapabilities(Vec<String>),
}

impl OrchestratorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed validator, planner settings and timeout from a loaded config.
    pub fn from_config(config: &SwarmConfig) -> Self {
        let planner = TemplatePlanner::new(
            Arc::new(UlidGenerator::new(SystemClock)),
            config.planner.clone(),
        );
        let validator = ThresholdValidator::new(config.confidence_threshold)
            .with_clamping(config.clamp_confidence);

        Self::new()
            .planner(Arc::new(planner))
            .validator(Arc::new(validator))
            .capability_timeout(config.capability_timeout())
    }

    pub fn planner(mut self, planner: Arc<dyn Planner>) -> Self {
        self.planner = Some(planner);
        self
    }

    pub fn validator(mut self, validator: Arc<dyn Validator>) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn store(mut self, store: Arc<dyn StateStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn events(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = Some(events);
        self
    }

    /// Replace the whole registry.
    pub fn registry(mut self, registry: CapabilityRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn register_capability(mut self, capability: Arc<dyn Capability>) -> Self {
        self.registry.register_capability(capability);
        self
    }

    pub fn register_skill<S: Skill>(mut self, skill: S) -> Self {
        self.registry.register_skill(skill);
        self
    }

    pub fn capability_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.capability_timeout = timeout;
        self
    }

    /// 期待される capability 名のリストを設定
    pub fn expect_capabilities(mut self, names: &[&str]) -> Self {
        self.expected_capabilities = Some(names.iter().map(|n| n.to_string()).collect());
        self
    }

    /// OrchestratorBuilder を構築して Orchestrator を生成
    ///
    /// expect_capabilities() で設定された名前が全て登録されていなければ
    /// BuildError::MissingCapabilities を返す。
    pub fn build(self) -> Result<Orchestrator, BuildError> {
        if let Some(expected) = &self.expected_capabilities {
            let missing: Vec<String> = expected
                .iter()
                .filter(|name| !self.registry.contains(name))
                .cloned()
                .collect();
            if !missing.is_empty() {
                return Err(BuildError::MissingCapabilities(missing));
            }
        }

        if self.registry.is_empty() {
            tracing::warn!("building orchestrator with an empty capability registry");
        }

        let executor =
            Executor::new(Arc::new(self.registry)).with_timeout(self.capability_timeout);

        Ok(Orchestrator::new(
            self.planner
                .unwrap_or_else(|| Arc::new(TemplatePlanner::default())),
            executor,
            self.validator
                .unwrap_or_else(|| Arc::new(ThresholdValidator::default())),
            self.store
                .unwrap_or_else(|| Arc::new(InMemoryStateStore::new())),
            self.events.unwrap_or_else(|| Arc::new(TracingEventSink)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Campaign, TaskStatus};
    use crate::impls::skills::{reference_registry, ContentGenerator, TrendAnalysis};
    use crate::impls::MemoryEventSink;

    #[test]
    fn test_build_success() {
        let orch = OrchestratorBuilder::new()
            .register_skill(TrendAnalysis)
            .expect_capabilities(&[TrendAnalysis::NAME])
            .build();
        assert!(orch.is_ok());
    }

    #[test]
    fn test_build_missing_capabilities() {
        let orch = OrchestratorBuilder::new()
            .register_skill(TrendAnalysis)
            .expect_capabilities(&[TrendAnalysis::NAME, ContentGenerator::NAME])
            .build();
        assert!(matches!(
            orch,
            Err(BuildError::MissingCapabilities(missing)) if missing == vec![ContentGenerator::NAME.to_string()]
        ));
    }

    #[test]
    fn test_build_no_expect_capabilities() {
        let orch = OrchestratorBuilder::new().build();
        assert!(orch.is_ok());
    }

    #[test]
    fn from_config_carries_threshold_and_timeout() {
        let config = SwarmConfig {
            confidence_threshold: 0.8,
            capability_timeout_ms: Some(1500),
            ..SwarmConfig::default()
        };

        let orch = OrchestratorBuilder::from_config(&config)
            .registry(reference_registry())
            .build()
            .unwrap();

        assert_eq!(orch.health().confidence_threshold, 0.8);
        assert_eq!(orch.executor().timeout(), Some(Duration::from_millis(1500)));
        assert_eq!(orch.health().capabilities.len(), 3);
    }

    #[tokio::test]
    async fn default_wiring_runs_the_reference_campaign() {
        let store = Arc::new(InMemoryStateStore::new());
        let events = Arc::new(MemoryEventSink::new());
        let orch = OrchestratorBuilder::new()
            .registry(reference_registry())
            .store(store.clone())
            .events(events.clone())
            .build()
            .unwrap();
        let campaign = Campaign::new(
            "Agentic Future",
            "Promote the use of autonomous agents in industry.",
        )
        .unwrap();

        let records = orch.run(&campaign).await.unwrap();

        assert_eq!(records.len(), 3);
        // trend 0.92 / content 0.95 / consistency 0.95 against the 0.9 default
        assert!(records.iter().all(|r| r.status == TaskStatus::Completed));
        assert_eq!(store.task_results(campaign.id).await.unwrap().len(), 3);
        assert_eq!(events.events().len(), 6);
    }
}
