//! Impls - ports の実装（開発用・テスト用）
//!
//! # 含まれる実装
//! - **InMemoryStateStore**: campaign 単位でロックする in-memory の StateStore
//! - **ThresholdValidator**: confidence threshold による承認ポリシー
//! - **TemplatePlanner**: 固定テンプレートの Planner
//! - **TracingEventSink / MemoryEventSink**: EventSink
//! - **skills**: リファレンス skill 群
//!
//! 永続化バックエンド（Redis / Postgres など）は別クレートに配置する想定です。

pub mod event_sinks;
pub mod memory_store;
pub mod skills;
pub mod template_planner;
pub mod threshold_validator;

pub use self::event_sinks::{MemoryEventSink, TracingEventSink};
pub use self::memory_store::InMemoryStateStore;
pub use self::template_planner::TemplatePlanner;
pub use self::threshold_validator::ThresholdValidator;
