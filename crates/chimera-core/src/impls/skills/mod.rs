//! Reference skills.
//!
//! Deterministic stand-ins for real content / trend / consistency backends,
//! good enough to drive a full campaign run end to end.

pub mod content_generator;
pub mod persona_consistency;
pub mod trend_analysis;

pub use self::content_generator::ContentGenerator;
pub use self::persona_consistency::PersonaConsistency;
pub use self::trend_analysis::TrendAnalysis;

use crate::typed::CapabilityRegistry;

/// Registry with every reference skill bound under its own name.
pub fn reference_registry() -> CapabilityRegistry {
    let mut registry = CapabilityRegistry::new();
    registry.register_skill(TrendAnalysis);
    registry.register_skill(ContentGenerator);
    registry.register_skill(PersonaConsistency);
    registry
}
