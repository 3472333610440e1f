//! Validator port - TaskResult から ValidationDecision を生成
//!
//! Validator は純粋関数として設計されます（副作用なし）。

use crate::domain::{TaskResult, ValidationDecision};

/// Classifies a task result as accepted, escalated or rejected.
pub trait Validator: Send + Sync {
    fn validate(&self, result: &TaskResult) -> ValidationDecision;

    /// Auto-approval threshold, reported by health checks.
    fn threshold(&self) -> f64;
}
