//! Service layer containing the decision engine and side-effect helpers.
//!
//! ## Service map
//! - `classify.rs` — tool name to ecosystem tag inference.
//! - `hard_requirement.rs` — Gate 1 evaluation.
//! - `lens.rs` — Gate 2 persona table + soft suggestion mapping.
//! - `ecosystem.rs` — Gate 3 evaluation over classified names.
//! - `engine.rs` — orchestrator state transitions and precedence rules.
//! - `present.rs` — recommendation triple derivation.
//! - `registry.rs` — static gate registry + per-comparison selector.
//! - `session.rs` — CLI answer replay over the engine.
//! - `storage.rs` — local session persistence + audit log.
//! - `config.rs` — config.toml loading.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Gate evaluation and presentation are pure; all I/O sits in `storage.rs`
//!   and `config.rs`.
//! - Gates never read each other's state; they communicate only through
//!   `GateSignal` values consumed by `engine.rs`.
//! - Keep command handlers thin; delegate to services.

pub mod classify;
pub mod config;
pub mod ecosystem;
pub mod engine;
pub mod hard_requirement;
pub mod lens;
pub mod output;
pub mod present;
pub mod registry;
pub mod session;
pub mod storage;
