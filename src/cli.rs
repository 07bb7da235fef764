use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "toolgate", version, about = "Pairwise tool comparison gates CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Begin a gate session for one comparison.
    Start {
        #[arg(long = "x", help = "Display name of option X")]
        x_name: String,
        #[arg(long = "y", help = "Display name of option Y")]
        y_name: String,
        #[arg(long, value_enum)]
        winner: Winner,
        #[arg(long, value_enum)]
        persona: Option<Persona>,
        #[arg(long = "rule", help = "Decision rule text, echoed verbatim")]
        decision_rule: Option<String>,
    },
    /// Answer one gate in the active session.
    Answer {
        #[command(subcommand)]
        gate: AnswerGate,
    },
    /// Show the current recommendation and per-gate outputs.
    Status,
    /// Discard the active session.
    Reset,
    /// One-shot session: apply answers in order, print the final result.
    Run {
        #[arg(long = "x")]
        x_name: String,
        #[arg(long = "y")]
        y_name: String,
        #[arg(long, value_enum)]
        winner: Winner,
        #[arg(long, value_enum)]
        persona: Option<Persona>,
        #[arg(long = "rule")]
        decision_rule: Option<String>,
        #[arg(
            long = "answer",
            help = "GATE=CHOICE, e.g. hard-requirement=x or ecosystem=apple; repeatable, applied in order"
        )]
        answers: Vec<String>,
    },
    /// Infer the platform ecosystem for a tool name.
    Classify { name: String },
    Gates {
        #[command(subcommand)]
        command: GateCommands,
    },
    Lens {
        #[command(subcommand)]
        command: LensCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum AnswerGate {
    /// Does one tool violate your hard requirement?
    HardRequirement {
        #[arg(value_enum)]
        choice: HardRequirementChoice,
    },
    /// Persona-specific scenario question (soft suggestion only).
    Lens {
        #[arg(value_enum)]
        choice: LensChoice,
    },
    /// Which ecosystem are you already using?
    Ecosystem {
        #[arg(value_enum)]
        choice: EcosystemChoice,
    },
}

#[derive(Subcommand, Debug)]
pub enum GateCommands {
    List,
    Show { slug: String },
}

#[derive(Subcommand, Debug)]
pub enum LensCommands {
    Show {
        #[arg(long, value_enum)]
        persona: Persona,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    X,
    Y,
    Depends,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Persona {
    Beginner,
    SoloUser,
    Student,
    BusyProfessional,
    PowerUser,
    NonTechnicalUser,
    Minimalist,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HardRequirementChoice {
    X,
    Y,
    Neither,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LensChoice {
    A,
    B,
    NotSure,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EcosystemChoice {
    Apple,
    Google,
    Microsoft,
    Multi,
    NotSure,
}
