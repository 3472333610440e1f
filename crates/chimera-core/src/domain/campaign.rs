//! Campaign record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::SwarmError;
use super::ids::CampaignId;
use super::status::CampaignStatus;
use crate::ports::{Clock, IdGenerator, SystemClock, UlidGenerator};

/// A goal submitted for planning and execution.
///
/// `state_version` starts at 1 and is only advanced by
/// `StateStore::update_campaign` (compare-and-swap on the expected version).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: CampaignId,
    pub title: String,
    pub goal: String,
    #[serde(default)]
    pub status: CampaignStatus,
    pub state_version: u64,
    pub created_at: DateTime<Utc>,
}

impl Campaign {
    /// Create a campaign with a fresh id and the current system time.
    pub fn new(title: impl Into<String>, goal: impl Into<String>) -> Result<Self, SwarmError> {
        let clock = SystemClock;
        Self::create(&UlidGenerator::new(clock), &clock, title, goal)
    }

    /// Create a campaign using injected id generation and time.
    pub fn create(
        ids: &dyn IdGenerator,
        clock: &dyn Clock,
        title: impl Into<String>,
        goal: impl Into<String>,
    ) -> Result<Self, SwarmError> {
        let title = title.into();
        let goal = goal.into();
        if title.trim().is_empty() {
            return Err(SwarmError::InvalidCampaign("title must not be empty".to_string()));
        }
        if goal.trim().is_empty() {
            return Err(SwarmError::InvalidCampaign("goal must not be empty".to_string()));
        }
        Ok(Self {
            id: ids.generate_campaign_id(),
            title,
            goal,
            status: CampaignStatus::Planning,
            state_version: 1,
            created_at: clock.now(),
        })
    }
}
