//! Full workflow overview view.
//!
//! One banner box summarizing the study inputs and the six-phase sequence,
//! followed by a copy-pasteable command per phase.
use crate::config::StudyConfig;
use crate::phase::{Phase, PHASES};
use crate::render;

/// Maximum theme characters shown in the banner.
const THEME_DISPLAY_CHARS: usize = 56;

/// Width of the uppercase phase column in the sequence listing.
const PHASE_COLUMN_WIDTH: usize = 22;

/// Print the overview box and the per-phase command list.
pub(super) fn print_overview(config: &StudyConfig) {
    println!();
    println!("{}", render::heavy_rule());
    println!("{}", render::line("THESIS DRAFT GENERATOR"));
    println!("{}", render::heavy_rule());
    println!(
        "{}",
        render::line(&format!(
            "Theme: {}",
            render::truncate(&config.theme, THEME_DISPLAY_CHARS)
        ))
    );
    println!(
        "{}",
        render::line(&format!("Instruments: {}", config.instruments.join(", ")))
    );
    println!(
        "{}",
        render::line(&format!("Sample Size: {}", config.sample_size))
    );
    println!("{}", render::rule());
    println!(
        "{}",
        render::line("WORKFLOW (6 phases with 2 feasibility checkpoints):")
    );
    println!("{}", render::blank());
    for (index, phase) in PHASES.iter().enumerate() {
        println!("{}", render::line(&sequence_entry(index, *phase)));
    }
    println!("{}", render::blank());
    println!(
        "{}",
        render::line("Execute phases sequentially. Review checkpoints before proceeding.")
    );
    println!("{}", render::heavy_rule());
    println!();
    println!("To execute a phase, run:");
    for phase in PHASES {
        println!("  tgen --phase {phase}");
    }
}

/// One sequence line, e.g. `Phase 2: FEASIBILITY-RESEARCH  -> Discover best
/// direction [CHECK]`.
fn sequence_entry(index: usize, phase: Phase) -> String {
    let spec = phase.spec();
    let marker = if spec.checkpoint.is_some() {
        " [CHECK]"
    } else {
        ""
    };
    format!(
        "Phase {}: {:<width$}-> {}{marker}",
        index + 1,
        phase.as_str().to_uppercase(),
        spec.summary,
        width = PHASE_COLUMN_WIDTH
    )
}
