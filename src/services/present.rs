//! Result presenter: pure derivation from engine state to the
//! headline/detail/next-action triple.
//!
//! Priority order, first match wins:
//! 1. no interaction yet
//! 2. hard elimination (either source)
//! 3. soft suggestion from the lens gate
//! 4. default verdict naming a tool
//! 5. default verdict "depends"

use crate::cli::Winner;
use crate::domain::models::{EngineState, Recommendation};
use crate::services::engine::surviving;

pub fn present(state: &EngineState, x_name: &str, y_name: &str, winner: Winner) -> Recommendation {
    if !state.answered_any {
        return Recommendation {
            headline: "Run the gates to fit this decision to your situation".to_string(),
            detail: "The default verdict stands until a hard requirement or your context changes the outcome.".to_string(),
            next_action: "Start with Gate 1.".to_string(),
        };
    }

    if let Some(survivor) = surviving(state, x_name, y_name) {
        return Recommendation {
            headline: format!("Your gate result: {survivor}"),
            detail: "A gate eliminated one option.".to_string(),
            next_action: format!("Continue with {survivor}."),
        };
    }

    if let Some(suggested) = state.suggested.as_deref() {
        return Recommendation {
            headline: format!("Recommended by Gate 2: {suggested}"),
            detail: "Gate 2 recommends a default based on your situation. No option was eliminated.".to_string(),
            next_action: format!("Try {suggested} first, then confirm using failure modes and quick rules."),
        };
    }

    match winner {
        Winner::X | Winner::Y => {
            let name = if winner == Winner::X { x_name } else { y_name };
            Recommendation {
                headline: format!("Default verdict: {name}"),
                detail: "This is the baseline verdict. Use the gates to override it if your situation differs.".to_string(),
                next_action: "Start by testing if either option violates a hard requirement.".to_string(),
            }
        }
        Winner::Depends => Recommendation {
            headline: "Default verdict: it depends".to_string(),
            detail: "This verdict depends on a detail. Use the gates to force a clear next step.".to_string(),
            next_action: "Start with the gates to narrow this down.".to_string(),
        },
    }
}
