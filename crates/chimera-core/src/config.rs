//! Swarm configuration (TOML).
//!
//! Every field is optional; a missing file yields `SwarmConfig::default()`.
//!
//! ```toml
//! confidence_threshold = 0.8
//! clamp_confidence = false
//! capability_timeout_ms = 30000
//!
//! [planner]
//! persona_id = "default_persona"
//! target_platform = "twitter"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::impls::threshold_validator::DEFAULT_CONFIDENCE_THRESHOLD;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SwarmConfig {
    /// Auto-approval threshold for the validator.
    pub confidence_threshold: f64,

    /// Clamp confidence scores into [0, 1] before classification.
    pub clamp_confidence: bool,

    /// Per-invocation capability timeout. Unset means no timeout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capability_timeout_ms: Option<u64>,

    pub planner: PlannerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlannerConfig {
    /// Persona every planned task is attributed to.
    pub persona_id: String,

    /// Voice handed to the content generator.
    pub persona_voice: String,

    pub target_platform: String,

    /// Persona description handed to the consistency check.
    pub soul_context: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            persona_id: "default_persona".to_string(),
            persona_voice: "Sophisticated Influencer".to_string(),
            target_platform: "twitter".to_string(),
            soul_context: "The persona is sophisticated and tech-savvy.".to_string(),
        }
    }
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            clamp_confidence: false,
            capability_timeout_ms: None,
            planner: PlannerConfig::default(),
        }
    }
}

impl SwarmConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.confidence_threshold.is_finite()
            || !(0.0..=1.0).contains(&self.confidence_threshold)
        {
            return Err(ConfigError::Invalid(format!(
                "confidence_threshold must be within [0, 1], got {}",
                self.confidence_threshold
            )));
        }
        if self.capability_timeout_ms == Some(0) {
            return Err(ConfigError::Invalid(
                "capability_timeout_ms must be > 0".to_string(),
            ));
        }
        let planner = &self.planner;
        for (field, value) in [
            ("planner.persona_id", &planner.persona_id),
            ("planner.persona_voice", &planner.persona_voice),
            ("planner.target_platform", &planner.target_platform),
            ("planner.soul_context", &planner.soul_context),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{field} must not be empty")));
            }
        }
        Ok(())
    }

    pub fn capability_timeout(&self) -> Option<Duration> {
        self.capability_timeout_ms.map(Duration::from_millis)
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SwarmConfig::default()`.
pub fn load_config(path: &Path) -> Result<SwarmConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(SwarmConfig::default());
    }
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: SwarmConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, SwarmConfig::default());
        assert_eq!(cfg.confidence_threshold, 0.9);
        assert_eq!(cfg.capability_timeout(), None);
    }

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("chimera.toml");
        fs::write(
            &path,
            "confidence_threshold = 0.8\ncapability_timeout_ms = 1500\n\n[planner]\ntarget_platform = \"mastodon\"\n",
        )
        .expect("write");

        let cfg = load_config(&path).expect("load");

        assert_eq!(cfg.confidence_threshold, 0.8);
        assert_eq!(cfg.capability_timeout(), Some(Duration::from_millis(1500)));
        assert_eq!(cfg.planner.target_platform, "mastodon");
        assert_eq!(cfg.planner.persona_id, "default_persona");
        assert!(!cfg.clamp_confidence);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("chimera.toml");
        fs::write(&path, "confidence_threshold = \"high\"\n").expect("write");

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn out_of_range_threshold_is_invalid() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("chimera.toml");
        fs::write(&path, "confidence_threshold = 1.5\n").expect("write");

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("confidence_threshold")));
    }

    #[test]
    fn zero_timeout_and_blank_planner_fields_are_invalid() {
        let cfg = SwarmConfig {
            capability_timeout_ms: Some(0),
            ..SwarmConfig::default()
        };
        assert!(cfg.validate().is_err());

        let mut cfg = SwarmConfig::default();
        cfg.planner.persona_id = "  ".to_string();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("planner.persona_id"));
    }

    #[test]
    fn config_round_trips_through_toml() {
        let cfg = SwarmConfig {
            confidence_threshold: 0.75,
            clamp_confidence: true,
            capability_timeout_ms: Some(250),
            planner: PlannerConfig::default(),
        };
        let text = toml::to_string(&cfg).expect("serialize");
        let back: SwarmConfig = toml::from_str(&text).expect("parse");
        assert_eq!(back, cfg);
    }
}
