use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{CapabilityError, TaskId};
use crate::typed::{Skill, SkillOutput};

fn default_platform() -> String {
    "twitter".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentGeneratorParams {
    pub prompt: String,
    pub persona: String,
    #[serde(default)]
    pub style_guidelines: Option<String>,
    #[serde(default = "default_platform")]
    pub target_platform: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedContent {
    pub content: String,
    pub media_url: Option<String>,
    pub metadata: serde_json::Value,
}

/// Simulated post generation in the requested persona's voice.
pub struct ContentGenerator;

#[async_trait]
impl Skill for ContentGenerator {
    const NAME: &'static str = "skill_content_generator";
    type Params = ContentGeneratorParams;

    async fn run(
        &self,
        _task_id: TaskId,
        params: ContentGeneratorParams,
    ) -> Result<SkillOutput, CapabilityError> {
        let mut content = format!(
            "[Generated for {}] {}\n(Voice: {})",
            params.target_platform, params.prompt, params.persona
        );
        if let Some(guidelines) = params.style_guidelines.as_deref() {
            content.push_str(&format!("\n(Guidelines: {guidelines})"));
        }

        let generated = GeneratedContent {
            content,
            media_url: None,
            metadata: json!({ "source": "simulated", "vibe": "consistent" }),
        };

        Ok(SkillOutput::new(
            json!(generated),
            0.95,
            "Content generated from persona constraints and style guidelines.",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(style_guidelines: Option<&str>) -> ContentGeneratorParams {
        ContentGeneratorParams {
            prompt: "Generate a viral post about Rust".to_string(),
            persona: "Sophisticated Influencer".to_string(),
            style_guidelines: style_guidelines.map(str::to_string),
            target_platform: default_platform(),
        }
    }

    #[tokio::test]
    async fn content_names_platform_prompt_and_voice() {
        let out = ContentGenerator.run(TaskId::random(), params(None)).await.unwrap();

        let content = out.output["content"].as_str().unwrap();
        assert_eq!(
            content,
            "[Generated for twitter] Generate a viral post about Rust\n(Voice: Sophisticated Influencer)"
        );
        assert_eq!(out.confidence, 0.95);
        assert!(out.output["media_url"].is_null());
    }

    #[tokio::test]
    async fn guidelines_are_appended() {
        let out = ContentGenerator
            .run(TaskId::random(), params(Some("shorter, no hashtags")))
            .await
            .unwrap();

        let content = out.output["content"].as_str().unwrap();
        assert!(content.ends_with("(Guidelines: shorter, no hashtags)"));
    }
}
