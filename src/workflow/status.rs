//! Status view: current configuration plus the per-phase status table.
//!
//! Status never advances a phase. The table reflects whatever external
//! tooling wrote into the record, with `pending` rows unmarked and anything
//! else flagged for the operator's attention.
use crate::config::StudyConfig;
use crate::phase::{Phase, PENDING_STATUS, PHASES};

/// Print the current configuration and one row per phase.
///
/// `None` means no configuration is persisted yet; that prints a hint and is
/// not an error.
pub(super) fn print_status(config: Option<&StudyConfig>) {
    let Some(config) = config else {
        println!("No configuration found. Initialize with --theme and --instruments.");
        return;
    };

    println!();
    println!("Current configuration:");
    println!("  Theme: {}", config.theme);
    println!("  Instruments: {}", config.instruments.join(", "));
    println!("  Sample: {}", config.sample_size);
    println!();
    println!("Phase status:");
    for phase in PHASES {
        println!("  {}", status_row(config, phase));
    }
}

/// One table row: `* ` marks any status other than `pending`.
fn status_row(config: &StudyConfig, phase: Phase) -> String {
    let status = config.phase_status(phase);
    let marker = if status == PENDING_STATUS { "  " } else { "* " };
    format!("{marker}{phase}: {status}")
}

#[cfg(test)]
mod tests {
    use super::status_row;
    use crate::config::StudyConfig;
    use crate::phase::{Phase, PhaseState};

    fn config() -> StudyConfig {
        StudyConfig::new("Theme", vec!["EQ-i".to_string()], 50)
    }

    #[test]
    fn pending_rows_are_unmarked() {
        assert_eq!(status_row(&config(), Phase::Research), "  research: pending");
    }

    #[test]
    fn non_pending_rows_get_the_attention_marker() {
        let mut config = config();
        config.phases.insert(
            Phase::Analyze,
            PhaseState {
                status: "complete".to_string(),
            },
        );
        assert_eq!(status_row(&config, Phase::Analyze), "* analyze: complete");
    }

    #[test]
    fn missing_keys_render_as_unknown_with_marker() {
        let mut config = config();
        config.phases.remove(&Phase::Write);
        assert_eq!(status_row(&config, Phase::Write), "* write: unknown");
    }
}
