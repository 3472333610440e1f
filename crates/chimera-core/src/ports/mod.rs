//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! Orchestrator はこれらの trait にのみ依存し、実装（impls）は
//! 起動時に注入されます。グローバルな状態は持ちません。

pub mod capability;
pub mod clock;
pub mod event_sink;
pub mod id_generator;
pub mod planner;
pub mod state_store;
pub mod validator;

pub use self::capability::Capability;
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::event_sink::EventSink;
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::planner::Planner;
pub use self::state_store::StateStore;
pub use self::validator::Validator;
