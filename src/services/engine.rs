//! Gate orchestrator: the single owner of cross-gate state.
//!
//! Gates emit a `GateSignal`; the transition functions here consume it and
//! mutate `EngineState`. Precedence rules:
//! - A hard-requirement elimination is never overridden or cleared by the
//!   ecosystem gate.
//! - An ecosystem elimination can be cleared by the ecosystem gate itself or
//!   superseded by a later hard-requirement elimination.
//! - Each gate may only clear an elimination it caused.
//!
//! There is no terminal state: every transition stays reversible within the
//! session, except the interaction flag which is monotonic.

use crate::domain::models::{Eliminated, EliminationSource, EngineState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateSignal {
    EliminateX,
    EliminateY,
    ClearElimination,
}

/// What an eliminating gate produced for one selection: its rendered lines
/// plus the signal for the orchestrator (`None` while locked).
#[derive(Debug)]
pub struct GateOutcome {
    pub lines: Vec<String>,
    pub signal: Option<GateSignal>,
}

/// Gate 1 signals. Eliminations always win; a clear only releases an
/// elimination the hard-requirement gate itself caused.
pub fn apply_hard_requirement(state: &mut EngineState, signal: GateSignal) {
    state.answered_any = true;

    match signal {
        GateSignal::EliminateX => eliminate(state, Eliminated::X, EliminationSource::HardRequirement),
        GateSignal::EliminateY => eliminate(state, Eliminated::Y, EliminationSource::HardRequirement),
        GateSignal::ClearElimination => {
            if state.source == EliminationSource::HardRequirement {
                clear(state);
            }
        }
    }
}

/// Gate 3 signals. Ignored entirely while the hard-requirement gate holds
/// the elimination; a clear only releases an ecosystem-sourced elimination.
pub fn apply_ecosystem(state: &mut EngineState, signal: GateSignal) {
    state.answered_any = true;

    if platform_locked(state) {
        return;
    }

    match signal {
        GateSignal::EliminateX => eliminate(state, Eliminated::X, EliminationSource::Ecosystem),
        GateSignal::EliminateY => eliminate(state, Eliminated::Y, EliminationSource::Ecosystem),
        GateSignal::ClearElimination => {
            if state.source == EliminationSource::Ecosystem {
                clear(state);
            }
        }
    }
}

/// Gate 2 output. Soft: never touches the elimination pair.
pub fn apply_suggestion(state: &mut EngineState, suggested: Option<String>) {
    state.answered_any = true;
    state.suggested = suggested;
}

fn eliminate(state: &mut EngineState, who: Eliminated, source: EliminationSource) {
    state.eliminated = who;
    state.source = source;
    // Any hard elimination freezes the lens gate; drop its suggestion.
    state.suggested = None;
}

fn clear(state: &mut EngineState) {
    state.eliminated = Eliminated::None;
    state.source = EliminationSource::None;
}

/// The lens gate is soft: any elimination disables it, regardless of source.
pub fn lens_locked(state: &EngineState) -> bool {
    state.eliminated != Eliminated::None
}

/// The ecosystem gate is only locked by a hard-requirement elimination, so
/// the user can still change or clear their own ecosystem answer.
pub fn platform_locked(state: &EngineState) -> bool {
    state.source == EliminationSource::HardRequirement && state.eliminated != Eliminated::None
}

pub fn surviving<'a>(state: &EngineState, x_name: &'a str, y_name: &'a str) -> Option<&'a str> {
    match state.eliminated {
        Eliminated::X => Some(y_name),
        Eliminated::Y => Some(x_name),
        Eliminated::None => None,
    }
}

pub fn locked_message(state: &EngineState, x_name: &str, y_name: &str) -> Option<String> {
    surviving(state, x_name, y_name).map(|name| format!("Decision already made: continue with {name}."))
}
