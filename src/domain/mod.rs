//! Shared data model layer (structs/enums only).
//!
//! ## Purpose
//! - Keep session/report structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — session, engine state, report/output structs.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects, no gate
//! logic. Transitions over `EngineState` live in `services/engine.rs`.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs and integration
//! contracts. Keep schema-impacting changes synchronized with
//! `docs/contracts/*`.

pub mod models;
