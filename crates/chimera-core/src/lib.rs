//! chimera-core
//!
//! Core building blocks for the Chimera swarm: a planner decomposes a
//! campaign into capability invocations, an executor runs them, a validator
//! decides each result's status, and a state store keeps the records.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, campaign, task, decision, status, errors, events）
//! - **ports**: 抽象化レイヤー（Planner, Capability, Validator, StateStore, EventSink, Clock, IdGenerator）
//! - **typed**: 型付き Skill API（Skill trait, TypedSkill, CapabilityRegistry）
//! - **impls**: 実装（InMemoryStateStore, ThresholdValidator, TemplatePlanner, reference skills）
//! - **app**: アプリケーションロジック（OrchestratorBuilder, Orchestrator, Executor）
//! - **config**: TOML 設定

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;
pub mod typed;
