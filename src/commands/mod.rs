//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `admin.rs` — classify/gates/lens inspection commands.
//! - `runtime.rs` — start/answer/status/reset/run session commands.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate decision logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod admin;
pub mod runtime;

pub use admin::handle_admin_commands;
pub use runtime::handle_runtime_commands;
