//! TypedSkill - Skill を object-safe な Capability に変換する
//!
//! # Type erasure
//! `TypedSkill<S>` は `Capability` を実装するので、
//! `HashMap<CapabilityName, Arc<dyn Capability>>` に格納できます。

use async_trait::async_trait;

use super::skill::Skill;
use crate::domain::{CapabilityError, TaskRequest, TaskResult};
use crate::ports::Capability;

pub struct TypedSkill<S: Skill> {
    skill: S,
}

impl<S: Skill> TypedSkill<S> {
    pub fn new(skill: S) -> Self {
        Self { skill }
    }
}

#[async_trait]
impl<S: Skill> Capability for TypedSkill<S> {
    fn name(&self) -> &str {
        S::NAME
    }

    async fn execute(&self, request: &TaskRequest) -> Result<TaskResult, CapabilityError> {
        let params: S::Params =
            serde_json::from_value(serde_json::Value::Object(request.params().clone()))
                .map_err(|e| CapabilityError::InvalidParams(format!("{}: {e}", S::NAME)))?;
        let out = self.skill.run(request.task_id(), params).await?;
        Ok(TaskResult::new(request, out.output, out.confidence, out.reasoning))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Params, TaskId};
    use crate::typed::SkillOutput;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct EchoParams {
        text: String,
    }

    struct Echo;

    #[async_trait]
    impl Skill for Echo {
        const NAME: &'static str = "skill_echo";
        type Params = EchoParams;

        async fn run(
            &self,
            _task_id: TaskId,
            params: EchoParams,
        ) -> Result<SkillOutput, CapabilityError> {
            Ok(SkillOutput::new(json!(params.text), 0.8, "echoed"))
        }
    }

    fn request(params: serde_json::Value) -> TaskRequest {
        let serde_json::Value::Object(params) = params else {
            panic!("params must be an object");
        };
        TaskRequest::new(TaskId::random(), Echo::NAME, params, "p1")
    }

    #[tokio::test]
    async fn decodes_params_and_wraps_output() {
        let cap = TypedSkill::new(Echo);
        let req = request(json!({ "text": "hello" }));

        let result = cap.execute(&req).await.unwrap();

        assert_eq!(cap.name(), "skill_echo");
        assert_eq!(result.task_id, req.task_id());
        assert_eq!(result.output, Some(json!("hello")));
        assert_eq!(result.confidence_score, 0.8);
        assert_eq!(result.reasoning, "echoed");
    }

    #[tokio::test]
    async fn invalid_params_are_reported_as_capability_error() {
        let cap = TypedSkill::new(Echo);
        let req = TaskRequest::new(TaskId::random(), Echo::NAME, Params::new(), "p1");

        let err = cap.execute(&req).await.unwrap_err();

        assert!(matches!(err, CapabilityError::InvalidParams(ref msg) if msg.contains("text")));
    }
}
