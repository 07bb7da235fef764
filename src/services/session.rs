//! Session orchestration: bridges CLI answers to the engine and renders
//! reports.
//!
//! The engine stays pure; this module owns the replay glue around it, in
//! particular re-deriving the lens suggestion from the stored lens choice
//! whenever an elimination is cleared and the lens gate unlocks again.

use crate::cli::{EcosystemChoice, HardRequirementChoice, LensChoice};
use crate::domain::models::{AnswerReport, Comparison, GateAnswers, GateView, Recommendation, Session, StatusReport};
use crate::services::engine;
use crate::services::registry::{self, HARD_REQUIREMENT, LENS_SCENARIO, PLATFORM_ECOSYSTEM};
use crate::services::{ecosystem, hard_requirement, lens, present};

pub fn start(comparison: Comparison) -> anyhow::Result<Session> {
    if comparison.x_name.trim().is_empty() || comparison.y_name.trim().is_empty() {
        anyhow::bail!("tool names must be non-empty");
    }
    if comparison.x_name == comparison.y_name {
        anyhow::bail!("tool names must be distinct: {}", comparison.x_name);
    }
    Ok(Session {
        comparison,
        engine: Default::default(),
        answers: GateAnswers::default(),
    })
}

pub fn answer_hard_requirement(
    session: &mut Session,
    choice: HardRequirementChoice,
) -> AnswerReport {
    let c = &session.comparison;
    let outcome = hard_requirement::evaluate(choice, &c.x_name, &c.y_name);
    session.answers.hard_requirement = Some(choice);
    if let Some(signal) = outcome.signal {
        engine::apply_hard_requirement(&mut session.engine, signal);
    }
    resync_lens(session);
    report(session, HARD_REQUIREMENT, true, outcome.lines)
}

pub fn answer_lens(session: &mut Session, choice: LensChoice) -> AnswerReport {
    let c = &session.comparison;
    let locked = engine::locked_message(&session.engine, &c.x_name, &c.y_name);

    if engine::lens_locked(&session.engine) {
        let outcome = lens::evaluate(
            c.persona,
            choice,
            c.winner,
            &c.x_name,
            &c.y_name,
            locked.as_deref(),
        );
        return report(session, LENS_SCENARIO, false, outcome.lines);
    }

    let outcome = lens::evaluate(c.persona, choice, c.winner, &c.x_name, &c.y_name, None);
    session.answers.lens = Some(choice);
    engine::apply_suggestion(&mut session.engine, outcome.suggested);
    report(session, LENS_SCENARIO, true, outcome.lines)
}

pub fn answer_ecosystem(session: &mut Session, choice: EcosystemChoice) -> AnswerReport {
    let c = &session.comparison;

    if engine::platform_locked(&session.engine) {
        let locked = engine::locked_message(&session.engine, &c.x_name, &c.y_name);
        let lines = ecosystem::locked_lines(locked.as_deref());
        return report(session, PLATFORM_ECOSYSTEM, false, lines);
    }

    let outcome = ecosystem::evaluate(choice, &c.x_name, &c.y_name);
    session.answers.ecosystem = Some(choice);
    if let Some(signal) = outcome.signal {
        engine::apply_ecosystem(&mut session.engine, signal);
    }
    resync_lens(session);
    report(session, PLATFORM_ECOSYSTEM, true, outcome.lines)
}

pub fn status(session: &Session) -> StatusReport {
    let c = &session.comparison;
    StatusReport {
        x_name: c.x_name.clone(),
        y_name: c.y_name.clone(),
        winner: c.winner,
        persona: c.persona,
        decision_rule: c.decision_rule.clone(),
        eliminated: session.engine.eliminated,
        source: session.engine.source,
        suggested: session.engine.suggested.clone(),
        answered_any: session.engine.answered_any,
        gates: gate_views(session),
        recommendation: recommendation(session),
    }
}

pub fn recommendation(session: &Session) -> Recommendation {
    let c = &session.comparison;
    present::present(&session.engine, &c.x_name, &c.y_name, c.winner)
}

/// An eliminating gate just fired or cleared. A hard elimination freezes the
/// lens and the engine already dropped its suggestion; on clear, the stored
/// lens answer becomes live again and its suggestion is re-derived.
fn resync_lens(session: &mut Session) {
    if engine::lens_locked(&session.engine) {
        return;
    }
    let c = &session.comparison;
    let choice = session.answers.lens.unwrap_or(LensChoice::NotSure);
    let outcome = lens::evaluate(c.persona, choice, c.winner, &c.x_name, &c.y_name, None);
    session.engine.suggested = outcome.suggested;
}

fn gate_views(session: &Session) -> Vec<GateView> {
    let c = &session.comparison;
    let locked = engine::locked_message(&session.engine, &c.x_name, &c.y_name);

    registry::gates_for_comparison(c.persona)
        .into_iter()
        .map(|def| {
            let (is_locked, lines) = match def.id {
                LENS_SCENARIO => {
                    let is_locked = engine::lens_locked(&session.engine);
                    let choice = session.answers.lens.unwrap_or(LensChoice::NotSure);
                    let outcome = lens::evaluate(
                        c.persona,
                        choice,
                        c.winner,
                        &c.x_name,
                        &c.y_name,
                        if is_locked { locked.as_deref() } else { None },
                    );
                    (is_locked, outcome.lines)
                }
                PLATFORM_ECOSYSTEM => {
                    let is_locked = engine::platform_locked(&session.engine);
                    let lines = if is_locked {
                        ecosystem::locked_lines(locked.as_deref())
                    } else {
                        match session.answers.ecosystem {
                            Some(choice) => ecosystem::evaluate(choice, &c.x_name, &c.y_name).lines,
                            None => ecosystem::prompt_lines(),
                        }
                    };
                    (is_locked, lines)
                }
                _ => {
                    let lines = match session.answers.hard_requirement {
                        Some(choice) => {
                            hard_requirement::evaluate(choice, &c.x_name, &c.y_name).lines
                        }
                        None => hard_requirement::prompt_lines(),
                    };
                    (false, lines)
                }
            };
            GateView {
                id: def.id.to_string(),
                name: def.name.to_string(),
                locked: is_locked,
                lines,
            }
        })
        .collect()
}

fn report(session: &Session, gate: &str, applied: bool, lines: Vec<String>) -> AnswerReport {
    AnswerReport {
        gate: gate.to_string(),
        applied,
        lines,
        recommendation: recommendation(session),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Persona, Winner};
    use crate::domain::models::{Eliminated, EliminationSource};

    fn comparison(winner: Winner, persona: Persona) -> Comparison {
        Comparison {
            x_name: "Square Appointments".to_string(),
            y_name: "Calendly".to_string(),
            winner,
            decision_rule: "Pick by setup tolerance.".to_string(),
            persona,
        }
    }

    #[test]
    fn start_rejects_empty_and_duplicate_names() {
        let mut c = comparison(Winner::X, Persona::Beginner);
        c.x_name = "  ".to_string();
        assert!(start(c).is_err());

        let mut c = comparison(Winner::X, Persona::Beginner);
        c.y_name = c.x_name.clone();
        assert!(start(c).is_err());
    }

    #[test]
    fn hard_elimination_locks_the_other_gates() {
        let mut s = start(comparison(Winner::X, Persona::Beginner)).unwrap();
        answer_hard_requirement(&mut s, HardRequirementChoice::X);

        let lens_report = answer_lens(&mut s, LensChoice::A);
        assert!(!lens_report.applied);
        assert_eq!(s.engine.suggested, None);

        let eco_report = answer_ecosystem(&mut s, EcosystemChoice::Apple);
        assert!(!eco_report.applied);
        assert_eq!(s.engine.eliminated, Eliminated::X);
        assert_eq!(s.engine.source, EliminationSource::HardRequirement);
    }

    #[test]
    fn clearing_the_hard_elimination_revives_the_stored_lens_answer() {
        let mut s = start(comparison(Winner::X, Persona::SoloUser)).unwrap();
        answer_lens(&mut s, LensChoice::A);
        assert_eq!(s.engine.suggested.as_deref(), Some("Square Appointments"));

        answer_hard_requirement(&mut s, HardRequirementChoice::Y);
        assert_eq!(s.engine.suggested, None);

        answer_hard_requirement(&mut s, HardRequirementChoice::Neither);
        assert_eq!(s.engine.eliminated, Eliminated::None);
        assert_eq!(s.engine.suggested.as_deref(), Some("Square Appointments"));
    }

    #[test]
    fn ecosystem_answer_can_be_revised_after_its_own_elimination() {
        let mut s = start(Comparison {
            x_name: "Apple Calendar".to_string(),
            y_name: "Calendly".to_string(),
            winner: Winner::Depends,
            decision_rule: String::new(),
            persona: Persona::Minimalist,
        })
        .unwrap();

        answer_ecosystem(&mut s, EcosystemChoice::Apple);
        assert_eq!(s.engine.eliminated, Eliminated::Y);

        let report = answer_ecosystem(&mut s, EcosystemChoice::Multi);
        assert!(report.applied);
        assert_eq!(s.engine.eliminated, Eliminated::None);
    }

    #[test]
    fn status_reports_one_view_per_gate() {
        let mut s = start(comparison(Winner::Depends, Persona::Student)).unwrap();
        answer_hard_requirement(&mut s, HardRequirementChoice::X);

        let st = status(&s);
        assert_eq!(st.gates.len(), 3);
        assert!(!st.gates[0].locked);
        assert!(st.gates[1].locked);
        assert!(st.gates[2].locked);
        assert!(st.gates[1].lines[0].contains("continue with Calendly"));
    }
}
