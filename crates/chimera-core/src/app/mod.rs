//! App - アプリケーション層
//!
//! ports を組み合わせて campaign の制御ループを実装します。
//!
//! # 主要コンポーネント
//! - **OrchestratorBuilder**: 構築とワイヤリング（起動時検証）
//! - **Orchestrator**: plan → execute → validate → persist のループ
//! - **Executor**: capability の解決と実行、失敗の吸収

pub mod builder;
pub mod executor;
pub mod orchestrator;

pub use self::builder::{BuildError, OrchestratorBuilder};
pub use self::executor::Executor;
pub use self::orchestrator::{HealthReport, Orchestrator};
