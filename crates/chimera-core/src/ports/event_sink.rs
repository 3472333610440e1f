//! EventSink port - ドメインイベントの記録
//!
//! - **TracingEventSink**: tracing に出力（デフォルト）
//! - **MemoryEventSink**: メモリに保持（テスト・観測用）

use crate::domain::DomainEvent;

/// EventSink はドメインイベントを記録
///
/// 監視専用。emit の結果で Orchestrator の制御フローは変わらない。
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &DomainEvent);
}
