//! Errors - エラー型と分類
//!
//! - `CapabilityError`: capability の実行失敗。Executor で吸収され、
//!   confidence 0.0 の TaskResult に変換される（呼び出し元には伝播しない）
//! - `StoreError`: StateStore の失敗。`SwarmError::Store` として `run` の外へ伝播する
//! - `SwarmError`: Orchestrator が返すエラー

use thiserror::Error;

use super::ids::CampaignId;

/// Failure reported by a capability while executing a task.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CapabilityError {
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    #[error("{0}")]
    Execution(String),
}

impl CapabilityError {
    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution(message.into())
    }
}

/// Failure of the state store to complete a read or write.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("campaign not found: {0}")]
    CampaignNotFound(CampaignId),

    #[error("version conflict for {campaign_id}: expected {expected}, found {actual}")]
    VersionConflict {
        campaign_id: CampaignId,
        expected: u64,
        actual: u64,
    },

    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Errors surfaced to the caller of the orchestrator.
///
/// Task failures are data (`TaskStatus::Failed` records), never a `SwarmError`.
#[derive(Debug, Error)]
pub enum SwarmError {
    #[error("invalid campaign: {0}")]
    InvalidCampaign(String),

    #[error("could not record campaign state: {0}")]
    Store(#[from] StoreError),
}

impl SwarmError {
    /// True when the system could not record what happened.
    pub fn is_storage(&self) -> bool {
        matches!(self, SwarmError::Store(_))
    }
}
