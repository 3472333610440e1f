//! Domain model (IDs, campaign, task request/result, status, decisions, events, errors).

pub mod campaign;
pub mod decision;
pub mod errors;
pub mod events;
pub mod ids;
pub mod status;
pub mod task;

pub use campaign::Campaign;
pub use decision::{ResultRecord, ValidationDecision};
pub use errors::{CapabilityError, StoreError, SwarmError};
pub use events::{DomainEvent, TaskEventKind};
pub use ids::{CampaignId, TaskId};
pub use status::{CampaignStatus, TaskStatus};
pub use task::{CapabilityName, Params, TaskRequest, TaskResult};
