//! CapabilityRegistry - capability の登録と解決
//!
//! 起動時に一度だけ構築し、`Arc<CapabilityRegistry>` として Executor に注入します
//! （モジュールレベルの singleton は使わない）。

use std::collections::HashMap;
use std::sync::Arc;

use super::adapter::TypedSkill;
use super::skill::Skill;
use crate::domain::CapabilityName;
use crate::ports::Capability;

/// Mapping from capability name to implementation.
///
/// Registering an already-bound name replaces the previous binding.
#[derive(Default, Clone)]
pub struct CapabilityRegistry {
    capabilities: HashMap<CapabilityName, Arc<dyn Capability>>,
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        Self {
            capabilities: HashMap::new(),
        }
    }

    /// Bind `name` to `capability`, returning the displaced binding if any.
    pub fn register(
        &mut self,
        name: impl Into<CapabilityName>,
        capability: Arc<dyn Capability>,
    ) -> Option<Arc<dyn Capability>> {
        let name = name.into();
        let previous = self.capabilities.insert(name.clone(), capability);
        if previous.is_some() {
            tracing::debug!(capability = %name, "capability binding replaced");
        }
        previous
    }

    /// Register under the capability's own name.
    pub fn register_capability(
        &mut self,
        capability: Arc<dyn Capability>,
    ) -> Option<Arc<dyn Capability>> {
        let name = CapabilityName::new(capability.name());
        self.register(name, capability)
    }

    pub fn register_skill<S: Skill>(&mut self, skill: S) -> Option<Arc<dyn Capability>> {
        self.register(S::NAME, Arc::new(TypedSkill::new(skill)))
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Capability>> {
        self.capabilities.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.capabilities.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<CapabilityName> {
        let mut names: Vec<CapabilityName> = self.capabilities.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }
}
