use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{CapabilityError, TaskId};
use crate::typed::{Skill, SkillOutput};

fn default_depth() -> String {
    "high".to_string()
}

fn default_timeframe() -> String {
    "24h".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrendAnalysisParams {
    pub topic: String,
    #[serde(default = "default_depth")]
    pub depth: String,
    #[serde(default = "default_timeframe")]
    pub timeframe: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendReport {
    pub topic: String,
    pub depth: String,
    pub timeframe: String,
    pub viral_potential: f64,
    pub key_keywords: Vec<String>,
    pub suggested_angles: Vec<String>,
}

/// Simulated trend lookup. Viral potential is sampled from [0.6, 0.99).
pub struct TrendAnalysis;

#[async_trait]
impl Skill for TrendAnalysis {
    const NAME: &'static str = "skill_trend_analysis";
    type Params = TrendAnalysisParams;

    async fn run(
        &self,
        _task_id: TaskId,
        params: TrendAnalysisParams,
    ) -> Result<SkillOutput, CapabilityError> {
        if params.topic.trim().is_empty() {
            return Err(CapabilityError::InvalidParams(
                "topic must not be empty".to_string(),
            ));
        }

        let viral_potential = rand::thread_rng().gen_range(0.6..0.99);
        let report = TrendReport {
            key_keywords: params
                .topic
                .split_whitespace()
                .map(str::to_lowercase)
                .chain(["tech".to_string(), "agents".to_string()])
                .collect(),
            suggested_angles: vec![
                format!("How AI agents are transforming {}", params.topic),
                format!("The future of {} in the agentic economy", params.topic),
            ],
            topic: params.topic,
            depth: params.depth,
            timeframe: params.timeframe,
            viral_potential,
        };
        let reasoning = format!(
            "Analyzed {} trends over {}. High viral potential detected.",
            report.topic, report.timeframe
        );

        Ok(SkillOutput::new(json!(report), 0.92, reasoning))
    }
}
