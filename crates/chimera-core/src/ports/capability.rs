//! Capability port - task を実行する pluggable な単位
//!
//! Executor は `CapabilityRegistry` から capability を引いて実行します。
//! 型付きで書きたい場合は `typed::Skill` を実装して `TypedSkill` で包みます。

use async_trait::async_trait;

use crate::domain::{CapabilityError, TaskRequest, TaskResult};

/// A named, pluggable unit of work.
///
/// Implementations may have side effects. Errors and panics are absorbed by
/// the Executor and never abort a campaign run.
#[async_trait]
pub trait Capability: Send + Sync {
    fn name(&self) -> &str;

    async fn execute(&self, request: &TaskRequest) -> Result<TaskResult, CapabilityError>;
}
