//! Gate 2: scenario lens.
//!
//! Persona-specific two-way question whose outcome is a soft suggestion,
//! never an elimination. The suggestion maps a choice to either the
//! comparison's default winner ("preferred") or the remaining option
//! ("other"). Which side of the question maps where differs by persona, so
//! the mapping is encoded explicitly per persona instead of derived from a
//! single rule: for Student, Beginner and BusyProfessional choice A favors
//! the *other* tool (short-term / low-friction readings), for everyone else
//! choice A favors the preferred tool.

use crate::cli::{LensChoice, Persona, Winner};
use serde::Serialize;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SuggestTarget {
    Preferred,
    Other,
}

impl SuggestTarget {
    fn flipped(self) -> SuggestTarget {
        match self {
            SuggestTarget::Preferred => SuggestTarget::Other,
            SuggestTarget::Other => SuggestTarget::Preferred,
        }
    }
}

/// Question and label set for one persona, plus the side-to-tool mapping.
#[derive(Debug, Serialize, Clone, Copy)]
pub struct PersonaConfig {
    pub persona: Persona,
    pub gate_title: &'static str,
    pub helper: &'static str,
    pub question: &'static str,
    pub label_a: &'static str,
    pub label_b: &'static str,
    pub label_not_sure: &'static str,
    pub meaning_a: &'static str,
    pub meaning_b: &'static str,
    pub a_suggests: SuggestTarget,
}

pub fn config(persona: Persona) -> PersonaConfig {
    match persona {
        Persona::Student => PersonaConfig {
            persona,
            gate_title: "Lens Gate",
            helper: "Choose the scenario that matches your situation. You don't need to already know the tools.",
            question: "Is this short-term use or a long-term system?",
            label_a: "Short-term (easy to start/exit)",
            label_b: "Long-term (durable system)",
            label_not_sure: "Not sure yet",
            meaning_a: "short",
            meaning_b: "long",
            a_suggests: SuggestTarget::Other,
        },
        Persona::Beginner => PersonaConfig {
            persona,
            gate_title: "Lens Gate",
            helper: "Answer based on your tolerance for setup. You don't need deep tool knowledge.",
            question: "Do you want something that works with almost no setup?",
            label_a: "Yes (minimal setup)",
            label_b: "No (I can handle setup)",
            label_not_sure: "Not sure yet",
            meaning_a: "min_setup",
            meaning_b: "ok_setup",
            a_suggests: SuggestTarget::Other,
        },
        Persona::SoloUser => PersonaConfig {
            persona,
            gate_title: "Lens Gate",
            helper: "Answer based on how much upkeep you can tolerate later.",
            question: "Do you want something that stays stable with minimal maintenance?",
            label_a: "Yes (low maintenance)",
            label_b: "No (I can manage upkeep)",
            label_not_sure: "Not sure yet",
            meaning_a: "low_maint",
            meaning_b: "ok_maint",
            a_suggests: SuggestTarget::Preferred,
        },
        Persona::BusyProfessional => PersonaConfig {
            persona,
            gate_title: "Lens Gate",
            helper: "Answer based on time pressure. Pick what fits your week, not your ideal setup.",
            question: "Do you need the fastest time-to-value right now?",
            label_a: "Yes (fastest to start)",
            label_b: "No (I can invest time upfront)",
            label_not_sure: "Not sure yet",
            meaning_a: "fast_now",
            meaning_b: "invest_upfront",
            a_suggests: SuggestTarget::Other,
        },
        Persona::NonTechnicalUser => PersonaConfig {
            persona,
            gate_title: "Lens Gate",
            helper: "Answer based on what feels safer. You're optimizing for confidence and low risk.",
            question: "Do you want the option that feels hardest to break?",
            label_a: "Yes (safest / hardest to break)",
            label_b: "No (I'm okay experimenting)",
            label_not_sure: "Not sure yet",
            meaning_a: "safe",
            meaning_b: "experiment",
            a_suggests: SuggestTarget::Preferred,
        },
        Persona::Minimalist => PersonaConfig {
            persona,
            gate_title: "Lens Gate",
            helper: "Answer based on feature tolerance. You're optimizing for fewer decisions.",
            question: "Do you want the simplest option with fewer features?",
            label_a: "Yes (simplest)",
            label_b: "No (features are okay)",
            label_not_sure: "Not sure yet",
            meaning_a: "simple",
            meaning_b: "features_ok",
            a_suggests: SuggestTarget::Preferred,
        },
        Persona::PowerUser => PersonaConfig {
            persona,
            gate_title: "Lens Gate",
            helper: "Answer based on ceiling. You're optimizing for what won't cap out later.",
            question: "Do you expect to push advanced workflows soon?",
            label_a: "Yes (I'll outgrow simple tools)",
            label_b: "No (basic is fine for now)",
            label_not_sure: "Not sure yet",
            meaning_a: "need_ceiling",
            meaning_b: "basic_ok",
            a_suggests: SuggestTarget::Preferred,
        },
    }
}

#[derive(Debug)]
pub struct LensOutcome {
    pub lines: Vec<String>,
    pub suggested: Option<String>,
}

/// `preferred` is the tool the default verdict names; with no verdict the
/// pair keeps its original order (the caller never reads `preferred` then).
fn pick_names<'a>(winner: Winner, x_name: &'a str, y_name: &'a str) -> (&'a str, &'a str) {
    match winner {
        Winner::X | Winner::Depends => (x_name, y_name),
        Winner::Y => (y_name, x_name),
    }
}

pub fn evaluate(
    persona: Persona,
    choice: LensChoice,
    winner: Winner,
    x_name: &str,
    y_name: &str,
    locked_message: Option<&str>,
) -> LensOutcome {
    if let Some(msg) = locked_message {
        return LensOutcome {
            lines: vec![
                msg.to_string(),
                "Continue with the remaining option.".to_string(),
            ],
            suggested: None,
        };
    }

    // No default verdict means there is no option to suggest.
    if winner == Winner::Depends {
        return LensOutcome {
            lines: vec![
                "This comparison depends on a detail not captured by this question alone."
                    .to_string(),
                "Keep the default verdict as your starting point.".to_string(),
            ],
            suggested: None,
        };
    }

    let (preferred, other) = pick_names(winner, x_name, y_name);

    if choice == LensChoice::NotSure {
        return LensOutcome {
            lines: vec![
                format!("If you're not sure, keep the default verdict: {preferred}."),
                "You can refine after reading failure modes and quick rules.".to_string(),
            ],
            suggested: None,
        };
    }

    let cfg = config(persona);
    let target = if choice == LensChoice::A {
        cfg.a_suggests
    } else {
        cfg.a_suggests.flipped()
    };
    let name = match target {
        SuggestTarget::Preferred => preferred,
        SuggestTarget::Other => other,
    };

    let lines = match (persona, choice) {
        (Persona::Student, LensChoice::A) => vec![
            format!("For short-term use, default to {name}."),
            "You're optimizing for quick start and easy exit.".to_string(),
        ],
        (Persona::Student, _) => vec![
            format!("For a long-term system, default to {name}."),
            "You're optimizing for durability over quick setup.".to_string(),
        ],
        (Persona::Beginner | Persona::BusyProfessional, LensChoice::A) => vec![
            format!("If you need fast time-to-value, default to {name}."),
            "You're optimizing for lower setup friction right now.".to_string(),
        ],
        (Persona::Beginner | Persona::BusyProfessional, _) => vec![
            format!("If you can invest time upfront, default to {name}."),
            "You're optimizing for the better long-run fit.".to_string(),
        ],
        (Persona::SoloUser, LensChoice::A) => vec![
            format!("If you want minimal upkeep, default to {name}."),
            "You're optimizing for stability without ongoing tuning.".to_string(),
        ],
        (Persona::SoloUser, _) => vec![
            format!("If you can manage some upkeep, default to {name}."),
            "You're allowing more maintenance in exchange for other benefits.".to_string(),
        ],
        (Persona::NonTechnicalUser, LensChoice::A) => vec![
            format!("If you want the safest-feeling option, default to {name}."),
            "You're optimizing for confidence and low risk of breaking things.".to_string(),
        ],
        (Persona::NonTechnicalUser, _) => vec![
            format!("If you're okay experimenting, default to {name}."),
            "You can tolerate some uncertainty to test fit.".to_string(),
        ],
        (Persona::Minimalist, LensChoice::A) => vec![
            format!("If you want fewer features and fewer decisions, default to {name}."),
            "You're optimizing for simplicity over capability.".to_string(),
        ],
        (Persona::Minimalist, _) => vec![
            format!("If features are okay, default to {name}."),
            "You're willing to accept complexity for extra capability.".to_string(),
        ],
        (Persona::PowerUser, LensChoice::A) => vec![
            format!("If you'll push advanced workflows, default to {name}."),
            "You're optimizing for headroom so you don't outgrow the tool.".to_string(),
        ],
        (Persona::PowerUser, _) => vec![
            format!("If basic is fine for now, default to {name}."),
            "You can prioritize simplicity if you won't hit the ceiling soon.".to_string(),
        ],
    };

    LensOutcome {
        lines,
        suggested: Some(name.to_string()),
    }
}
