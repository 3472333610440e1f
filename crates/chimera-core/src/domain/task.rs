use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use super::ids::TaskId;

/// Parameter payload handed to a capability.
pub type Params = serde_json::Map<String, serde_json::Value>;

/// Name a capability is registered under (e.g. `skill_trend_analysis`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityName(String);

impl CapabilityName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CapabilityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for CapabilityName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CapabilityName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for CapabilityName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// One unit of planned work. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRequest {
    task_id: TaskId,
    capability: CapabilityName,
    params: Params,
    persona_id: String,
}

impl TaskRequest {
    pub fn new(
        task_id: TaskId,
        capability: impl Into<CapabilityName>,
        params: Params,
        persona_id: impl Into<String>,
    ) -> Self {
        Self {
            task_id,
            capability: capability.into(),
            params,
            persona_id: persona_id.into(),
        }
    }

    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    pub fn capability(&self) -> &CapabilityName {
        &self.capability
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn persona_id(&self) -> &str {
        &self.persona_id
    }
}

/// What a capability produced for one TaskRequest.
///
/// `confidence_score` is conventionally in [0, 1] but is not clamped here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResult {
    pub task_id: TaskId,
    pub capability: CapabilityName,
    pub output: Option<serde_json::Value>,
    pub confidence_score: f64,
    pub reasoning: String,
}

impl TaskResult {
    pub fn new(
        request: &TaskRequest,
        output: serde_json::Value,
        confidence_score: f64,
        reasoning: impl Into<String>,
    ) -> Self {
        Self {
            task_id: request.task_id(),
            capability: request.capability().clone(),
            output: Some(output),
            confidence_score,
            reasoning: reasoning.into(),
        }
    }

    /// A result with no output and confidence 0.0.
    ///
    /// Always classified `FAILED` by the threshold policy.
    pub fn zero_confidence(request: &TaskRequest, reasoning: impl Into<String>) -> Self {
        Self {
            task_id: request.task_id(),
            capability: request.capability().clone(),
            output: None,
            confidence_score: 0.0,
            reasoning: reasoning.into(),
        }
    }
}
