//! Static gate registry plus the per-comparison gate selector.
//!
//! The selector is deterministic and currently returns the three core gates
//! everywhere; branch by persona here once more gates exist.

use crate::cli::Persona;
use crate::domain::models::GateDef;

pub const HARD_REQUIREMENT: &str = "hard_requirement";
pub const LENS_SCENARIO: &str = "lens_scenario";
pub const PLATFORM_ECOSYSTEM: &str = "platform_ecosystem";

const GATES: [GateDef; 3] = [
    GateDef {
        id: HARD_REQUIREMENT,
        slug: "hard-requirement-gate",
        name: "Hard Requirement Gate",
        description: "Eliminate one option immediately if it violates a hard requirement.",
        badge: "Gate",
    },
    GateDef {
        id: LENS_SCENARIO,
        slug: "lens-gate",
        name: "Lens Gate",
        description: "Pick your situation (short-term, long-term, not sure) and get the right next move.",
        badge: "Gate",
    },
    GateDef {
        id: PLATFORM_ECOSYSTEM,
        slug: "platform-ecosystem-gate",
        name: "Platform / Ecosystem Gate",
        description: "If you're already committed to Apple, Google, or Microsoft, eliminate the tool that doesn't fit your ecosystem.",
        badge: "Gate",
    },
];

pub fn list_gates() -> Vec<GateDef> {
    GATES.to_vec()
}

pub fn gate_by_slug(slug: &str) -> Option<GateDef> {
    GATES.iter().copied().find(|g| g.slug == slug)
}

pub fn gate_by_id(id: &str) -> Option<GateDef> {
    GATES.iter().copied().find(|g| g.id == id)
}

pub fn gates_for_comparison(_persona: Persona) -> Vec<GateDef> {
    GATES.to_vec()
}
