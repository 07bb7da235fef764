//! Gate 1: hard requirement.
//!
//! A three-way choice that can eliminate one option outright. Evaluation is
//! pure and idempotent; nothing is emitted before the user's first explicit
//! selection, so there is no default-biased elimination.

use crate::cli::HardRequirementChoice;
use crate::services::engine::{GateOutcome, GateSignal};

pub fn prompt_lines() -> Vec<String> {
    vec![
        "Select an option to see the result.".to_string(),
        "If one tool violates a hard requirement, eliminate it immediately.".to_string(),
    ]
}

pub fn evaluate(choice: HardRequirementChoice, x_name: &str, y_name: &str) -> GateOutcome {
    match choice {
        HardRequirementChoice::X => GateOutcome {
            lines: vec![
                format!("{x_name} violates your hard requirement."),
                format!("Eliminate {x_name} and continue evaluation with {y_name}."),
            ],
            signal: Some(GateSignal::EliminateX),
        },
        HardRequirementChoice::Y => GateOutcome {
            lines: vec![
                format!("{y_name} violates your hard requirement."),
                format!("Eliminate {y_name} and continue evaluation with {x_name}."),
            ],
            signal: Some(GateSignal::EliminateY),
        },
        HardRequirementChoice::Neither => GateOutcome {
            lines: vec![
                "Neither tool violates your hard requirement.".to_string(),
                "Proceed to the next evaluation gate.".to_string(),
            ],
            signal: Some(GateSignal::ClearElimination),
        },
    }
}
