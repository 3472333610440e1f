//! ThresholdValidator - confidence score による承認ポリシー
//!
//! - `score >= threshold`        → COMPLETED（自動承認）
//! - `0.7 <= score < threshold`  → ESC_HITL（人手レビューへエスカレーション）
//! - `score < 0.7`               → FAILED（却下）

use crate::domain::{TaskResult, TaskStatus, ValidationDecision};
use crate::ports::Validator;

/// Default auto-approval threshold.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.9;

/// Scores below this are rejected outright. Not configurable.
pub const ESCALATION_FLOOR: f64 = 0.7;

pub const AUTO_APPROVED_FEEDBACK: &str = "Auto-approved: High confidence and consistency.";

/// Confidence-threshold policy.
///
/// Scores are compared as reported unless `clamp_confidence` is set, in which
/// case they are clamped into [0, 1] first. A NaN score satisfies no
/// comparison and is rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdValidator {
    threshold: f64,
    clamp_confidence: bool,
}

impl ThresholdValidator {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            clamp_confidence: false,
        }
    }

    pub fn with_clamping(mut self, clamp_confidence: bool) -> Self {
        self.clamp_confidence = clamp_confidence;
        self
    }

    fn effective_score(&self, score: f64) -> f64 {
        if self.clamp_confidence {
            score.clamp(0.0, 1.0)
        } else {
            score
        }
    }
}

impl Default for ThresholdValidator {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIDENCE_THRESHOLD)
    }
}

impl Validator for ThresholdValidator {
    fn validate(&self, result: &TaskResult) -> ValidationDecision {
        let score = self.effective_score(result.confidence_score);

        if score >= self.threshold {
            ValidationDecision::new(TaskStatus::Completed, AUTO_APPROVED_FEEDBACK)
        } else if score >= ESCALATION_FLOOR {
            ValidationDecision::new(
                TaskStatus::EscHitl,
                format!(
                    "Confidence {score:?} is below threshold {:?}. Escalating to human review.",
                    self.threshold
                ),
            )
        } else {
            ValidationDecision::new(
                TaskStatus::Failed,
                format!(
                    "Rejected: Confidence {score:?} is too low. Reasoning: {}",
                    result.reasoning
                ),
            )
        }
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }
}
