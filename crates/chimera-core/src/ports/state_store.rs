//! StateStore port - campaign と ResultRecord の正本（source of truth）
//!
//! # 設計原則
//! - campaign ごとに append-only な ResultRecord のリストを持つ
//! - 異なる campaign への操作は並行に実行されても安全であること
//! - `state_version` は `update_campaign` の compare-and-swap でのみ進む

use async_trait::async_trait;

use crate::domain::{Campaign, CampaignId, ResultRecord, StoreError};

#[async_trait]
pub trait StateStore: Send + Sync {
    /// Upsert a campaign by id.
    ///
    /// The first save for an id also creates its (empty) result list; later
    /// saves must keep the existing results intact. A save never changes the
    /// stored `state_version`, and a copy older than the stored version is
    /// ignored.
    async fn save_campaign(&self, campaign: &Campaign) -> Result<(), StoreError>;

    /// Append a record to a campaign's result list.
    ///
    /// Unknown campaigns are a no-op.
    async fn save_task_result(
        &self,
        campaign_id: CampaignId,
        record: ResultRecord,
    ) -> Result<(), StoreError>;

    async fn get_campaign(&self, campaign_id: CampaignId) -> Result<Option<Campaign>, StoreError>;

    /// Results recorded so far, in append order. Safe to call mid-run.
    async fn task_results(&self, campaign_id: CampaignId) -> Result<Vec<ResultRecord>, StoreError>;

    /// Optimistic-concurrency write.
    ///
    /// Succeeds only if the stored `state_version` equals `expected_version`,
    /// and stores the campaign with the version advanced by one.
    async fn update_campaign(
        &self,
        campaign: &Campaign,
        expected_version: u64,
    ) -> Result<Campaign, StoreError>;
}
