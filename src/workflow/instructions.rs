//! Per-phase instruction view.
//!
//! Prints the static instruction box for one phase. Unknown names get a
//! one-line notice on stdout and are not an error.
use crate::phase::{Phase, PhaseSpec};
use crate::render;

/// Print the instruction box for `input`, or a one-line notice when the
/// name is outside the closed phase set.
pub(super) fn print_instructions(input: &str) {
    match Phase::parse(input) {
        Some(phase) => print_phase_box(phase.spec()),
        None => {
            tracing::debug!(input, "unrecognized phase requested");
            println!("Unknown phase: {input}");
        }
    }
}

fn print_phase_box(spec: &PhaseSpec) {
    println!();
    println!("{}", render::rule());
    println!("{}", render::line(spec.title));
    println!("{}", render::rule());
    println!("{}", render::line(&format!("Skill: {}", spec.skill)));
    println!("{}", render::blank());
    if let Some(checkpoint) = spec.checkpoint {
        println!("{}", render::line(checkpoint));
        println!("{}", render::blank());
    }
    println!("{}", render::line("Tasks:"));
    for (index, task) in spec.tasks.iter().enumerate() {
        println!("{}", render::line(&format!("{}. {task}", index + 1)));
    }
    println!("{}", render::blank());
    println!("{}", render::line("Outputs:"));
    for output in spec.outputs {
        println!("{}", render::line(&format!("- {output}")));
    }
    if !spec.notes.is_empty() {
        println!("{}", render::blank());
        for note in spec.notes {
            println!("{}", render::line(note));
        }
    }
    println!("{}", render::rule());
}
