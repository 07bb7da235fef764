use crate::cli::{EcosystemChoice, HardRequirementChoice, LensChoice, Persona, Winner};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Inputs supplied per comparison. Immutable for the session.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Comparison {
    pub x_name: String,
    pub y_name: String,
    pub winner: Winner,
    /// Display-only text, echoed verbatim, never parsed.
    #[serde(default)]
    pub decision_rule: String,
    pub persona: Persona,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Session {
    pub comparison: Comparison,
    pub engine: EngineState,
    pub answers: GateAnswers,
}

/// The raw choice recorded per gate. `None` means the gate is still
/// unselected; the lens gate treats that as `NotSure`.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct GateAnswers {
    pub hard_requirement: Option<HardRequirementChoice>,
    pub lens: Option<LensChoice>,
    pub ecosystem: Option<EcosystemChoice>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Eliminated {
    #[default]
    None,
    X,
    Y,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EliminationSource {
    #[default]
    None,
    HardRequirement,
    Ecosystem,
}

/// Cross-gate state owned by the orchestrator. Gates never touch this
/// directly; they emit signals consumed by `services/engine.rs`.
///
/// Invariant: `source == None` iff `eliminated == None`.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct EngineState {
    pub eliminated: Eliminated,
    pub source: EliminationSource,
    pub suggested: Option<String>,
    pub answered_any: bool,
}

#[derive(Debug, Serialize, Clone)]
pub struct Recommendation {
    pub headline: String,
    pub detail: String,
    pub next_action: String,
}

/// One gate's textual output as currently rendered.
#[derive(Debug, Serialize)]
pub struct GateView {
    pub id: String,
    pub name: String,
    pub locked: bool,
    pub lines: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AnswerReport {
    pub gate: String,
    /// False when the gate was locked and the answer was not applied.
    pub applied: bool,
    pub lines: Vec<String>,
    pub recommendation: Recommendation,
}

#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub x_name: String,
    pub y_name: String,
    pub winner: Winner,
    pub persona: Persona,
    pub decision_rule: String,
    pub eliminated: Eliminated,
    pub source: EliminationSource,
    pub suggested: Option<String>,
    pub answered_any: bool,
    pub gates: Vec<GateView>,
    pub recommendation: Recommendation,
}

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub steps: Vec<AnswerReport>,
    pub recommendation: Recommendation,
}

#[derive(Debug, Serialize)]
pub struct ClassifyReport {
    pub name: String,
    pub ecosystem: String,
}

/// Registry entry for one gate.
#[derive(Debug, Serialize, Clone, Copy)]
pub struct GateDef {
    pub id: &'static str,
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub badge: &'static str,
}
