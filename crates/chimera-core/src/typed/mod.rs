//! Typed - 型付き capability API
//!
//! # 二層構造
//! - **表層（Typed）**: `Skill` trait - パラメータ型を静的に指定
//! - **内部（Dyn）**: `ports::Capability` - object-safe, type erasure
//!
//! `CapabilityRegistry` は両方を受け付け、名前で `Arc<dyn Capability>` を解決します。

pub mod adapter;
pub mod registry;
pub mod skill;

pub use self::adapter::TypedSkill;
pub use self::registry::CapabilityRegistry;
pub use self::skill::{Skill, SkillOutput};
