//! InMemoryStateStore - 開発・テスト用の StateStore
//!
//! # 実装詳細
//! - 外側の `RwLock<HashMap<..>>` は campaign の登録・検索のみに使う
//! - campaign ごとの `Mutex<CampaignEntry>` で記録を直列化する
//! - そのため異なる campaign の run は同じロックで競合しない

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use crate::domain::{Campaign, CampaignId, ResultRecord, StoreError};
use crate::ports::StateStore;

/// Authoritative copy of one campaign and its results.
#[derive(Debug)]
struct CampaignEntry {
    campaign: Campaign,
    results: Vec<ResultRecord>,
}

impl CampaignEntry {
    fn new(campaign: Campaign) -> Self {
        Self {
            campaign,
            results: Vec::new(),
        }
    }
}

#[derive(Default)]
pub struct InMemoryStateStore {
    entries: RwLock<HashMap<CampaignId, Arc<Mutex<CampaignEntry>>>>,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn campaign_count(&self) -> usize {
        self.entries.read().await.len()
    }

    async fn entry(&self, campaign_id: CampaignId) -> Option<Arc<Mutex<CampaignEntry>>> {
        self.entries.read().await.get(&campaign_id).cloned()
    }
}

#[async_trait]
impl StateStore for InMemoryStateStore {
    async fn save_campaign(&self, campaign: &Campaign) -> Result<(), StoreError> {
        let entry = {
            let mut entries = self.entries.write().await;
            match entries.entry(campaign.id) {
                Entry::Occupied(existing) => Arc::clone(existing.get()),
                Entry::Vacant(slot) => {
                    slot.insert(Arc::new(Mutex::new(CampaignEntry::new(campaign.clone()))));
                    return Ok(());
                }
            }
        };
        // results are left untouched on re-save
        let mut entry = entry.lock().await;
        let stored_version = entry.campaign.state_version;
        if campaign.state_version < stored_version {
            tracing::warn!(
                campaign_id = %campaign.id,
                stale = campaign.state_version,
                stored = stored_version,
                "ignoring save of a stale campaign copy"
            );
            return Ok(());
        }
        entry.campaign = campaign.clone();
        // only update_campaign advances the version
        entry.campaign.state_version = stored_version;
        Ok(())
    }

    async fn save_task_result(
        &self,
        campaign_id: CampaignId,
        record: ResultRecord,
    ) -> Result<(), StoreError> {
        match self.entry(campaign_id).await {
            Some(entry) => entry.lock().await.results.push(record),
            None => {
                tracing::warn!(%campaign_id, task_id = %record.task_id, "dropping result for unknown campaign");
            }
        }
        Ok(())
    }

    async fn get_campaign(&self, campaign_id: CampaignId) -> Result<Option<Campaign>, StoreError> {
        match self.entry(campaign_id).await {
            Some(entry) => Ok(Some(entry.lock().await.campaign.clone())),
            None => Ok(None),
        }
    }

    async fn task_results(&self, campaign_id: CampaignId) -> Result<Vec<ResultRecord>, StoreError> {
        match self.entry(campaign_id).await {
            Some(entry) => Ok(entry.lock().await.results.clone()),
            None => Ok(Vec::new()),
        }
    }

    async fn update_campaign(
        &self,
        campaign: &Campaign,
        expected_version: u64,
    ) -> Result<Campaign, StoreError> {
        let entry = self
            .entry(campaign.id)
            .await
            .ok_or(StoreError::CampaignNotFound(campaign.id))?;
        let mut entry = entry.lock().await;

        let actual = entry.campaign.state_version;
        if actual != expected_version {
            return Err(StoreError::VersionConflict {
                campaign_id: campaign.id,
                expected: expected_version,
                actual,
            });
        }

        let mut updated = campaign.clone();
        updated.state_version = expected_version + 1;
        entry.campaign = updated.clone();
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        CampaignStatus, Params, TaskId, TaskRequest, TaskResult, TaskStatus, ValidationDecision,
    };
    use serde_json::json;

    fn record(capability: &str) -> ResultRecord {
        let req = TaskRequest::new(TaskId::random(), capability, Params::new(), "p1");
        ResultRecord::merge(
            TaskResult::new(&req, json!(null), 0.95, "ok"),
            ValidationDecision::new(TaskStatus::Completed, "approved"),
        )
    }

    #[tokio::test]
    async fn save_then_get_returns_same_campaign() {
        let store = InMemoryStateStore::new();
        let campaign = Campaign::new("State Test Campaign", "Test state persistence").unwrap();

        store.save_campaign(&campaign).await.unwrap();
        let loaded = store.get_campaign(campaign.id).await.unwrap().unwrap();

        assert_eq!(loaded.title, campaign.title);
        assert_eq!(loaded.goal, campaign.goal);
        assert_eq!(loaded.status, campaign.status);
        assert!(store.task_results(campaign.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_campaign_is_absent() {
        let store = InMemoryStateStore::new();
        assert!(store.get_campaign(CampaignId::random()).await.unwrap().is_none());
        assert!(store.task_results(CampaignId::random()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn results_append_in_order_and_survive_resave() {
        let store = InMemoryStateStore::new();
        let campaign = Campaign::new("c", "g").unwrap();
        store.save_campaign(&campaign).await.unwrap();

        for name in ["a", "b", "c"] {
            store.save_task_result(campaign.id, record(name)).await.unwrap();
        }
        store.save_campaign(&campaign).await.unwrap();

        let results = store.task_results(campaign.id).await.unwrap();
        let names: Vec<&str> = results.iter().map(|r| r.capability.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(store.campaign_count().await, 1);
    }

    #[tokio::test]
    async fn resave_upserts_campaign_fields() {
        let store = InMemoryStateStore::new();
        let mut campaign = Campaign::new("c", "g").unwrap();
        store.save_campaign(&campaign).await.unwrap();

        campaign.status = CampaignStatus::Paused;
        store.save_campaign(&campaign).await.unwrap();

        let loaded = store.get_campaign(campaign.id).await.unwrap().unwrap();
        assert_eq!(loaded.status, CampaignStatus::Paused);
    }

    #[tokio::test]
    async fn result_for_unknown_campaign_is_a_no_op() {
        let store = InMemoryStateStore::new();
        let id = CampaignId::random();

        store.save_task_result(id, record("a")).await.unwrap();

        assert!(store.task_results(id).await.unwrap().is_empty());
        assert_eq!(store.campaign_count().await, 0);
    }

    #[tokio::test]
    async fn update_advances_version_on_match() {
        let store = InMemoryStateStore::new();
        let mut campaign = Campaign::new("c", "g").unwrap();
        store.save_campaign(&campaign).await.unwrap();

        campaign.status = CampaignStatus::Active;
        let updated = store.update_campaign(&campaign, 1).await.unwrap();
        assert_eq!(updated.state_version, 2);
        assert_eq!(updated.status, CampaignStatus::Active);

        let updated = store.update_campaign(&updated, 2).await.unwrap();
        assert_eq!(updated.state_version, 3);

        let loaded = store.get_campaign(campaign.id).await.unwrap().unwrap();
        assert_eq!(loaded.state_version, 3);
    }

    #[tokio::test]
    async fn update_with_stale_version_is_rejected() {
        let store = InMemoryStateStore::new();
        let campaign = Campaign::new("c", "g").unwrap();
        store.save_campaign(&campaign).await.unwrap();
        store.update_campaign(&campaign, 1).await.unwrap();

        let err = store.update_campaign(&campaign, 1).await.unwrap_err();

        assert_eq!(
            err,
            StoreError::VersionConflict {
                campaign_id: campaign.id,
                expected: 1,
                actual: 2,
            }
        );
        let loaded = store.get_campaign(campaign.id).await.unwrap().unwrap();
        assert_eq!(loaded.state_version, 2);
    }

    #[tokio::test]
    async fn stale_resave_does_not_roll_back_an_update() {
        let store = InMemoryStateStore::new();
        let original = Campaign::new("c", "g").unwrap();
        store.save_campaign(&original).await.unwrap();

        let mut active = original.clone();
        active.status = CampaignStatus::Active;
        store.update_campaign(&active, 1).await.unwrap();

        store.save_campaign(&original).await.unwrap();

        let loaded = store.get_campaign(original.id).await.unwrap().unwrap();
        assert_eq!(loaded.state_version, 2);
        assert_eq!(loaded.status, CampaignStatus::Active);
        assert!(matches!(
            store.update_campaign(&original, 1).await,
            Err(StoreError::VersionConflict { expected: 1, actual: 2, .. })
        ));
    }

    #[tokio::test]
    async fn resave_cannot_advance_the_version() {
        let store = InMemoryStateStore::new();
        let mut campaign = Campaign::new("c", "g").unwrap();
        store.save_campaign(&campaign).await.unwrap();

        campaign.state_version = 9;
        campaign.title = "renamed".to_string();
        store.save_campaign(&campaign).await.unwrap();

        let loaded = store.get_campaign(campaign.id).await.unwrap().unwrap();
        assert_eq!(loaded.state_version, 1);
        assert_eq!(loaded.title, "renamed");
    }

    #[tokio::test]
    async fn update_of_unknown_campaign_fails() {
        let store = InMemoryStateStore::new();
        let campaign = Campaign::new("c", "g").unwrap();

        let err = store.update_campaign(&campaign, 1).await.unwrap_err();

        assert_eq!(err, StoreError::CampaignNotFound(campaign.id));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_writers_on_distinct_campaigns_do_not_interfere() {
        let store = Arc::new(InMemoryStateStore::new());
        let campaigns: Vec<Campaign> = (0..8)
            .map(|i| Campaign::new(format!("c{i}"), "g").unwrap())
            .collect();
        for campaign in &campaigns {
            store.save_campaign(campaign).await.unwrap();
        }

        let mut joins = Vec::new();
        for campaign in campaigns.clone() {
            let store = Arc::clone(&store);
            joins.push(tokio::spawn(async move {
                for i in 0..50 {
                    store
                        .save_task_result(campaign.id, record(&format!("t{i}")))
                        .await
                        .unwrap();
                }
            }));
        }
        for join in joins {
            join.await.unwrap();
        }

        for campaign in &campaigns {
            let results = store.task_results(campaign.id).await.unwrap();
            assert_eq!(results.len(), 50);
            assert_eq!(results[0].capability.as_str(), "t0");
            assert_eq!(results[49].capability.as_str(), "t49");
        }
    }
}
