//! Executor - capability の解決と実行（Worker）
//!
//! 失敗はすべてここで吸収します：
//! - capability 未登録
//! - capability が `Err` を返した
//! - capability が panic した
//! - timeout
//!
//! いずれも confidence 0.0 の TaskResult になり、Orchestrator には伝播しません。

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{TaskRequest, TaskResult};
use crate::typed::CapabilityRegistry;

/// Runs a TaskRequest through the capability registered under its name.
pub struct Executor {
    registry: Arc<CapabilityRegistry>,
    timeout: Option<Duration>,
}

impl Executor {
    pub fn new(registry: Arc<CapabilityRegistry>) -> Self {
        Self {
            registry,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn registry(&self) -> &CapabilityRegistry {
        &self.registry
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Execute one request. Never fails: every failure becomes a zero-confidence result.
    pub async fn execute(&self, request: &TaskRequest) -> TaskResult {
        let name = request.capability();
        let Some(capability) = self.registry.get(name.as_str()) else {
            tracing::warn!(capability = %name, task_id = %request.task_id(), "capability not registered");
            return TaskResult::zero_confidence(
                request,
                format!("Capability '{name}' not found or not registered."),
            );
        };

        tracing::debug!(capability = %name, task_id = %request.task_id(), "dispatching task");

        // Run on its own task so a panicking capability cannot take the run down.
        let capability = Arc::clone(capability);
        let owned = request.clone();
        let mut handle = tokio::spawn(async move { capability.execute(&owned).await });

        let joined = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, &mut handle).await {
                Ok(joined) => joined,
                Err(_) => {
                    handle.abort();
                    tracing::warn!(capability = %name, task_id = %request.task_id(), ?limit, "capability timed out");
                    return TaskResult::zero_confidence(
                        request,
                        format!("Execution error in capability {name}: timed out after {limit:?}"),
                    );
                }
            },
            None => handle.await,
        };

        match joined {
            Ok(Ok(mut result)) => {
                // results always echo the originating request
                result.task_id = request.task_id();
                result.capability = name.clone();
                result
            }
            Ok(Err(err)) => {
                tracing::warn!(capability = %name, task_id = %request.task_id(), error = %err, "capability failed");
                TaskResult::zero_confidence(
                    request,
                    format!("Execution error in capability {name}: {err}"),
                )
            }
            Err(join_err) => {
                let detail = if join_err.is_panic() {
                    format!("panicked: {}", panic_message(join_err.into_panic()))
                } else {
                    "cancelled".to_string()
                };
                tracing::warn!(capability = %name, task_id = %request.task_id(), %detail, "capability aborted");
                TaskResult::zero_confidence(
                    request,
                    format!("Execution error in capability {name}: {detail}"),
                )
            }
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
