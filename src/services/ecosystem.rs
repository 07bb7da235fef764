//! Gate 3: platform/ecosystem fit.
//!
//! Classifies both tool names and eliminates the one that mismatches the
//! user's chosen ecosystem, but only when exactly one side matches. Fully
//! deterministic given the two names and the choice; re-selecting the same
//! ecosystem always yields the same emission.

use crate::cli::EcosystemChoice;
use crate::services::classify::{classify, EcosystemTag};
use crate::services::engine::{GateOutcome, GateSignal};

pub fn prompt_lines() -> Vec<String> {
    vec![
        "Pick the ecosystem you're already committed to.".to_string(),
        "Then this gate will tell you if one option is a mismatch.".to_string(),
    ]
}

pub fn locked_lines(locked_message: Option<&str>) -> Vec<String> {
    vec![
        locked_message
            .unwrap_or("Decision already made by an earlier gate.")
            .to_string(),
        "Continue with the remaining option.".to_string(),
    ]
}

pub fn evaluate(choice: EcosystemChoice, x_name: &str, y_name: &str) -> GateOutcome {
    let eco = match choice {
        EcosystemChoice::Multi => {
            return GateOutcome {
                lines: vec![
                    "You use more than one ecosystem, so ecosystem fit won't decide this."
                        .to_string(),
                    "Proceed to the next evaluation gate.".to_string(),
                ],
                signal: Some(GateSignal::ClearElimination),
            };
        }
        EcosystemChoice::NotSure => {
            return GateOutcome {
                lines: vec![
                    "You don't have a strong ecosystem constraint.".to_string(),
                    "Proceed to the next evaluation gate.".to_string(),
                ],
                signal: Some(GateSignal::ClearElimination),
            };
        }
        EcosystemChoice::Apple => EcosystemTag::Apple,
        EcosystemChoice::Google => EcosystemTag::Google,
        EcosystemChoice::Microsoft => EcosystemTag::Microsoft,
    };

    let x_matches = classify(x_name) == eco;
    let y_matches = classify(y_name) == eco;

    if x_matches && !y_matches {
        return GateOutcome {
            lines: vec![
                format!("{y_name} is a weaker fit for your {} ecosystem.", eco.label()),
                format!("Eliminate {y_name} and continue with {x_name}."),
            ],
            signal: Some(GateSignal::EliminateY),
        };
    }

    if y_matches && !x_matches {
        return GateOutcome {
            lines: vec![
                format!("{x_name} is a weaker fit for your {} ecosystem.", eco.label()),
                format!("Eliminate {x_name} and continue with {y_name}."),
            ],
            signal: Some(GateSignal::EliminateX),
        };
    }

    // Both match or neither matches: ecosystem fit decides nothing.
    GateOutcome {
        lines: vec![
            "Ecosystem fit does not clearly eliminate an option here.".to_string(),
            "Proceed to the next evaluation gate.".to_string(),
        ],
        signal: Some(GateSignal::ClearElimination),
    }
}
