//! TemplatePlanner - 固定テンプレートによる plan 生成
//!
//! trend analysis → content generation → persona consistency の順に
//! 3 つの TaskRequest を生成します。

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::config::PlannerConfig;
use crate::domain::{Campaign, Params, TaskRequest};
use crate::impls::skills::{ContentGenerator, PersonaConsistency, TrendAnalysis};
use crate::ports::{IdGenerator, Planner, SystemClock, UlidGenerator};
use crate::typed::Skill;

/// Placeholder for content that an earlier step will produce.
pub const PENDING_CONTENT: &str = "PENDING_CONTENT";

pub struct TemplatePlanner {
    ids: Arc<dyn IdGenerator>,
    config: PlannerConfig,
}

impl TemplatePlanner {
    pub fn new(ids: Arc<dyn IdGenerator>, config: PlannerConfig) -> Self {
        Self { ids, config }
    }

    fn request(&self, capability: &str, params: serde_json::Value) -> TaskRequest {
        let params = match params {
            serde_json::Value::Object(map) => map,
            _ => Params::new(),
        };
        TaskRequest::new(
            self.ids.generate_task_id(),
            capability,
            params,
            self.config.persona_id.clone(),
        )
    }

    fn template(&self, campaign: &Campaign, style_guidelines: Option<&str>) -> Vec<TaskRequest> {
        let mut content_params = json!({
            "prompt": format!(
                "Generate a viral post about {} based on {}",
                campaign.title, campaign.goal
            ),
            "persona": self.config.persona_voice,
            "target_platform": self.config.target_platform,
        });
        if let Some(guidelines) = style_guidelines {
            content_params["style_guidelines"] = json!(guidelines);
        }

        vec![
            self.request(
                TrendAnalysis::NAME,
                json!({ "topic": campaign.title, "depth": "high" }),
            ),
            self.request(ContentGenerator::NAME, content_params),
            self.request(
                PersonaConsistency::NAME,
                json!({
                    "content_to_verify": PENDING_CONTENT,
                    "soul_context": self.config.soul_context,
                }),
            ),
        ]
    }
}

impl Default for TemplatePlanner {
    fn default() -> Self {
        Self::new(
            Arc::new(UlidGenerator::new(SystemClock)),
            PlannerConfig::default(),
        )
    }
}

#[async_trait]
impl Planner for TemplatePlanner {
    async fn create_plan(&self, campaign: &Campaign) -> Vec<TaskRequest> {
        self.template(campaign, None)
    }

    /// Same template; non-blank feedback becomes the content step's style guidelines.
    async fn replan(&self, campaign: &Campaign, feedback: &str) -> Vec<TaskRequest> {
        let feedback = feedback.trim();
        let guidelines = (!feedback.is_empty()).then_some(feedback);
        self.template(campaign, guidelines)
    }
}
