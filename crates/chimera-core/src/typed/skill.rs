//! Skill trait - 型付き capability の定義
//!
//! `Skill` は capability 名（`const NAME`）とパラメータ型を対応付けます。
//! パラメータの decode は `TypedSkill` が行うので、`run` は型付きの値だけを扱えばよい。

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::domain::{CapabilityError, TaskId};

/// What a skill reports back: output payload, self-assessed confidence and why.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillOutput {
    pub output: serde_json::Value,
    pub confidence: f64,
    pub reasoning: String,
}

impl SkillOutput {
    pub fn new(output: serde_json::Value, confidence: f64, reasoning: impl Into<String>) -> Self {
        Self {
            output,
            confidence,
            reasoning: reasoning.into(),
        }
    }
}

/// A capability with a typed parameter payload.
///
/// # 使用例
/// ```ignore
/// #[derive(Deserialize)]
/// struct EchoParams { text: String }
///
/// struct Echo;
///
/// #[async_trait]
/// impl Skill for Echo {
///     const NAME: &'static str = "skill_echo";
///     type Params = EchoParams;
///
///     async fn run(&self, _task_id: TaskId, params: EchoParams) -> Result<SkillOutput, CapabilityError> {
///         Ok(SkillOutput::new(json!(params.text), 1.0, "echoed"))
///     }
/// }
/// ```
#[async_trait]
pub trait Skill: Send + Sync + 'static {
    const NAME: &'static str;

    type Params: DeserializeOwned + Send + 'static;

    async fn run(&self, task_id: TaskId, params: Self::Params)
        -> Result<SkillOutput, CapabilityError>;
}
