use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{CapabilityError, TaskId};
use crate::typed::{Skill, SkillOutput};

#[derive(Debug, Clone, Deserialize)]
pub struct PersonaConsistencyParams {
    pub content_to_verify: String,
    pub soul_context: String,
    #[serde(default)]
    pub constraints: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConsistencyReport {
    pub is_consistent: bool,
    pub score: f64,
    pub deviations: Vec<String>,
    pub feedback: String,
}

/// Simulated persona check: flags constraint phrases that appear verbatim in the content.
pub struct PersonaConsistency;

const BASE_SCORE: f64 = 0.95;
const DEVIATION_PENALTY: f64 = 0.3;

#[async_trait]
impl Skill for PersonaConsistency {
    const NAME: &'static str = "skill_persona_consistency";
    type Params = PersonaConsistencyParams;

    async fn run(
        &self,
        _task_id: TaskId,
        params: PersonaConsistencyParams,
    ) -> Result<SkillOutput, CapabilityError> {
        let content = params.content_to_verify.to_lowercase();
        let deviations: Vec<String> = params
            .constraints
            .iter()
            .filter(|c| !c.trim().is_empty() && content.contains(&c.to_lowercase()))
            .cloned()
            .collect();

        let score = (BASE_SCORE - DEVIATION_PENALTY * deviations.len() as f64).max(0.0);
        let report = ConsistencyReport {
            is_consistent: deviations.is_empty(),
            score,
            feedback: if deviations.is_empty() {
                "Content aligns with the established voice and tone.".to_string()
            } else {
                format!("Content uses forbidden phrasing: {}", deviations.join(", "))
            },
            deviations,
        };
        let reasoning = format!(
            "Verified content against persona context ({} constraints).",
            params.constraints.len()
        );

        Ok(SkillOutput::new(json!(report), score, reasoning))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(content: &str, constraints: &[&str]) -> PersonaConsistencyParams {
        PersonaConsistencyParams {
            content_to_verify: content.to_string(),
            soul_context: "The persona is sophisticated and tech-savvy.".to_string(),
            constraints: constraints.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn consistent_content_scores_high() {
        let out = PersonaConsistency
            .run(TaskId::random(), params("A measured take on agents.", &["bruh"]))
            .await
            .unwrap();

        assert_eq!(out.confidence, 0.95);
        assert_eq!(out.output["is_consistent"], true);
    }

    #[tokio::test]
    async fn each_deviation_lowers_the_score() {
        let out = PersonaConsistency
            .run(TaskId::random(), params("Bruh this is lit", &["bruh", "lit"]))
            .await
            .unwrap();

        assert!(out.confidence < 0.7);
        assert_eq!(out.output["is_consistent"], false);
        assert_eq!(out.output["deviations"].as_array().unwrap().len(), 2);
    }
}
