//! The closed set of workflow phases and their static instruction data.
//!
//! Phase identity is an enum rather than free text so the persisted `phases`
//! map and the CLI agree on one vocabulary. The instruction content lives in
//! a const table; printing it is the workflow layer's concern.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow phases in execution order.
///
/// `Ord` follows declaration order, so maps keyed by `Phase` iterate and
/// serialize in workflow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Research,
    FeasibilityResearch,
    Simulate,
    FeasibilityData,
    Analyze,
    Write,
}

/// All six phases in workflow order.
pub const PHASES: [Phase; 6] = [
    Phase::Research,
    Phase::FeasibilityResearch,
    Phase::Simulate,
    Phase::FeasibilityData,
    Phase::Analyze,
    Phase::Write,
];

/// Status string written for every phase at configuration creation.
pub const PENDING_STATUS: &str = "pending";

impl Phase {
    /// Stable identifier used on the CLI and as the persisted map key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Research => "research",
            Phase::FeasibilityResearch => "feasibility-research",
            Phase::Simulate => "simulate",
            Phase::FeasibilityData => "feasibility-data",
            Phase::Analyze => "analyze",
            Phase::Write => "write",
        }
    }

    /// Parse an identifier; `None` for anything outside the closed set.
    ///
    /// Matching is exact: no case folding, no prefix completion.
    pub fn parse(input: &str) -> Option<Phase> {
        PHASES.iter().copied().find(|phase| phase.as_str() == input)
    }

    /// Static instruction data for this phase.
    pub fn spec(&self) -> &'static PhaseSpec {
        &PHASE_SPECS[*self as usize]
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-phase status record stored in the configuration file.
///
/// The status value is free text: external tooling advances it, and this
/// coordinator only ever writes `pending` and reads whatever is there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseState {
    pub status: String,
}

impl PhaseState {
    /// Fresh state as written at configuration creation.
    pub fn pending() -> Self {
        Self {
            status: PENDING_STATUS.to_string(),
        }
    }
}

/// Static description of one phase: the skill that executes it, what it
/// should do, and what it leaves behind.
#[derive(Debug)]
pub struct PhaseSpec {
    /// Instruction box title, e.g. `PHASE 6: THESIS WRITING`.
    pub title: &'static str,
    /// Skill document the external agent follows.
    pub skill: &'static str,
    /// One-line summary shown in the workflow overview.
    pub summary: &'static str,
    /// Checkpoint banner; set only on the two feasibility phases.
    pub checkpoint: Option<&'static str>,
    /// Numbered task list.
    pub tasks: &'static [&'static str],
    /// Files the phase is expected to produce under `outputs/`.
    pub outputs: &'static [&'static str],
    /// Trailing note lines (review reminders, decision guide).
    pub notes: &'static [&'static str],
}

static PHASE_SPECS: [PhaseSpec; 6] = [
    PhaseSpec {
        title: "PHASE 1: RESEARCH",
        skill: "skills/research/SKILL.md",
        summary: "Gather literature & instruments",
        checkpoint: None,
        tasks: &[
            "Search literature for each construct in the theme",
            "Gather instrument specifications",
            "Build bibliography (25-40 recent sources)",
            "Document expected relationships between constructs",
        ],
        outputs: &[
            "outputs/research/literature_review.md",
            "outputs/research/constructs.json",
            "outputs/research/instruments_detailed.json",
            "outputs/research/bibliography.json",
        ],
        notes: &[],
    },
    PhaseSpec {
        title: "PHASE 2: FEASIBILITY - RESEARCH DIRECTION",
        skill: "skills/feasibility-research/SKILL.md",
        summary: "Discover best direction",
        checkpoint: Some("CHECKPOINT: Discover the most scientifically relevant direction."),
        tasks: &[
            "Map established vs. novel findings",
            "Identify gaps and opportunities",
            "Evaluate hypothesis options (novelty, feasibility, interest)",
            "Recommend optimal research direction",
        ],
        outputs: &[
            "outputs/feasibility/research_landscape.json",
            "outputs/feasibility/direction_recommendation.md",
            "outputs/feasibility/feasibility_matrix.md",
        ],
        notes: &[">> Review direction_recommendation.md before proceeding! <<"],
    },
    PhaseSpec {
        title: "PHASE 3: DATA SIMULATION",
        skill: "skills/data-simulator/SKILL.md",
        summary: "Generate realistic data",
        checkpoint: None,
        tasks: &[
            "Load instrument specs and refined hypotheses",
            "Generate demographics (Romanian sample by default)",
            "Simulate responses with embedded correlations",
            "Compute subscale scores",
        ],
        outputs: &[
            "outputs/data/demographics.csv",
            "outputs/data/responses_raw.csv",
            "outputs/data/responses_coded.xlsx",
            "outputs/data/simulation_parameters.json",
        ],
        notes: &[],
    },
    PhaseSpec {
        title: "PHASE 4: FEASIBILITY - DATA VALIDATION",
        skill: "skills/feasibility-data/SKILL.md",
        summary: "Validate data quality",
        checkpoint: Some("CHECKPOINT: Validate data quality before full analysis."),
        tasks: &[
            "Check if target correlations were achieved",
            "Verify scale reliability (alpha >= 0.70)",
            "Assess statistical power for planned tests",
            "Flag distribution problems",
        ],
        outputs: &[
            "outputs/feasibility/data_quality.json",
            "outputs/feasibility/data_feasibility_report.md",
        ],
        notes: &[
            "Decision:",
            "- PROCEED: All checks pass",
            "- CAUTION: Minor issues, note limitations",
            "- REGENERATE: Critical issues, return to Phase 3",
        ],
    },
    PhaseSpec {
        title: "PHASE 5: DATA ANALYSIS",
        skill: "skills/data-analysis/SKILL.md",
        summary: "Statistical analysis",
        checkpoint: None,
        tasks: &[
            "Compute descriptive statistics",
            "Test hypotheses (correlations, t-tests, ANOVA)",
            "Calculate reliability (Cronbach's alpha)",
            "Generate visualizations",
        ],
        outputs: &[
            "outputs/analysis/descriptive_stats.json",
            "outputs/analysis/hypothesis_tests.json",
            "outputs/analysis/reliability.json",
            "outputs/analysis/figures/*.png",
            "outputs/analysis/tables/*.md",
        ],
        notes: &[],
    },
    PhaseSpec {
        title: "PHASE 6: THESIS WRITING",
        skill: "skills/thesis-writer/SKILL.md",
        summary: "Compose thesis chapters",
        checkpoint: None,
        tasks: &[
            "Compose Introduction",
            "Write Chapter 1 (Theory) from literature_review.md",
            "Write Chapter 2 (Methods) from instruments_detailed.json",
            "Write Chapter 3 (Results) from analysis outputs",
            "Write Chapter 4 (Conclusions)",
            "Generate Abstract",
            "Assemble final document",
        ],
        outputs: &["outputs/thesis/chapters/*.md", "outputs/thesis/thesis_draft.docx"],
        notes: &[],
    },
];

#[cfg(test)]
#[path = "phase_tests.rs"]
mod tests;
