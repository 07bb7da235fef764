use crate::cli::{
    AnswerGate, Cli, Commands, EcosystemChoice, HardRequirementChoice, LensChoice,
};
use crate::domain::models::{AnswerReport, Comparison, RunReport, Session, StatusReport};
use crate::services::config::{resolve_persona, ConfigFile};
use crate::services::output::print_one;
use crate::services::storage::{audit, clear_session, load_session, save_session};
use crate::services::session;
use clap::ValueEnum;

pub fn handle_runtime_commands(cli: &Cli, config: &ConfigFile) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Start {
            x_name,
            y_name,
            winner,
            persona,
            decision_rule,
        } => {
            let comparison = Comparison {
                x_name: x_name.clone(),
                y_name: y_name.clone(),
                winner: *winner,
                decision_rule: decision_rule.clone().unwrap_or_default(),
                persona: resolve_persona(*persona, config)?,
            };
            let session = session::start(comparison)?;
            save_session(&session)?;
            if config.general.audit_log {
                audit("start", serde_json::json!({
                    "x": session.comparison.x_name,
                    "y": session.comparison.y_name,
                }));
            }
            let report = session::status(&session);
            print_one(cli.json, report, status_rows)?;
        }
        Commands::Answer { gate } => {
            let mut session = active_session()?;
            let report = apply_answer(&mut session, gate);
            save_session(&session)?;
            if config.general.audit_log {
                audit("answer", serde_json::json!({
                    "gate": report.gate,
                    "applied": report.applied,
                }));
            }
            print_one(cli.json, report, answer_rows)?;
        }
        Commands::Status => {
            let session = active_session()?;
            let report = session::status(&session);
            print_one(cli.json, report, status_rows)?;
        }
        Commands::Reset => {
            let removed = clear_session()?;
            if config.general.audit_log {
                audit("reset", serde_json::json!({ "removed": removed }));
            }
            print_one(cli.json, removed, |r| {
                if *r {
                    "session cleared".to_string()
                } else {
                    "no active session".to_string()
                }
            })?;
        }
        Commands::Run {
            x_name,
            y_name,
            winner,
            persona,
            decision_rule,
            answers,
        } => {
            let comparison = Comparison {
                x_name: x_name.clone(),
                y_name: y_name.clone(),
                winner: *winner,
                decision_rule: decision_rule.clone().unwrap_or_default(),
                persona: resolve_persona(*persona, config)?,
            };
            let mut session = session::start(comparison)?;
            let mut steps = Vec::new();
            for spec in answers {
                steps.push(apply_scripted_answer(&mut session, spec)?);
            }
            let report = RunReport {
                recommendation: session::recommendation(&session),
                steps,
            };
            print_one(cli.json, report, run_rows)?;
        }
        _ => {}
    }
    Ok(())
}

fn active_session() -> anyhow::Result<Session> {
    load_session()?.ok_or_else(|| anyhow::anyhow!("no active session: run `toolgate start` first"))
}

fn apply_answer(session: &mut Session, gate: &AnswerGate) -> AnswerReport {
    match gate {
        AnswerGate::HardRequirement { choice } => {
            session::answer_hard_requirement(session, *choice)
        }
        AnswerGate::Lens { choice } => session::answer_lens(session, *choice),
        AnswerGate::Ecosystem { choice } => session::answer_ecosystem(session, *choice),
    }
}

/// Parse one `GATE=CHOICE` pair from `run --answer` and apply it.
fn apply_scripted_answer(session: &mut Session, spec: &str) -> anyhow::Result<AnswerReport> {
    let (gate, choice) = spec
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("invalid --answer '{spec}': expected GATE=CHOICE"))?;

    let gate = gate.trim().replace('_', "-");
    let choice = choice.trim();
    match gate.as_str() {
        "hard-requirement" => {
            let c = HardRequirementChoice::from_str(choice, true)
                .map_err(|e| anyhow::anyhow!("invalid hard-requirement choice '{choice}': {e}"))?;
            Ok(session::answer_hard_requirement(session, c))
        }
        "lens" => {
            let c = LensChoice::from_str(choice, true)
                .map_err(|e| anyhow::anyhow!("invalid lens choice '{choice}': {e}"))?;
            Ok(session::answer_lens(session, c))
        }
        "ecosystem" => {
            let c = EcosystemChoice::from_str(choice, true)
                .map_err(|e| anyhow::anyhow!("invalid ecosystem choice '{choice}': {e}"))?;
            Ok(session::answer_ecosystem(session, c))
        }
        other => anyhow::bail!(
            "unknown gate '{other}': expected hard-requirement, lens, or ecosystem"
        ),
    }
}

fn answer_rows(report: &AnswerReport) -> String {
    let mut rows = report.lines.clone();
    rows.push(String::new());
    rows.push(report.recommendation.headline.clone());
    rows.push(report.recommendation.next_action.clone());
    rows.join("\n")
}

fn status_rows(report: &StatusReport) -> String {
    let mut rows = vec![
        report.recommendation.headline.clone(),
        report.recommendation.detail.clone(),
        report.recommendation.next_action.clone(),
    ];
    if !report.decision_rule.is_empty() {
        rows.push(format!("rule: {}", report.decision_rule));
    }
    for gate in &report.gates {
        rows.push(String::new());
        let marker = if gate.locked { " [locked]" } else { "" };
        rows.push(format!("{}{}", gate.name, marker));
        rows.extend(gate.lines.iter().cloned());
    }
    rows.join("\n")
}

fn run_rows(report: &RunReport) -> String {
    let mut rows = Vec::new();
    for step in &report.steps {
        let marker = if step.applied { "" } else { " (locked)" };
        rows.push(format!("{}{}: {}", step.gate, marker, step.lines.join(" ")));
    }
    rows.push(report.recommendation.headline.clone());
    rows.push(report.recommendation.next_action.clone());
    rows.join("\n")
}
