//! CLI argument parsing for the thesis draft workflow.
//!
//! The CLI is intentionally thin: it resolves one configuration record and
//! prints operator-facing text. The phase work itself is done by external
//! skills, so nothing here executes a phase.
use clap::Parser;
use std::path::PathBuf;

/// Default simulated-respondent count when `--sample` is omitted.
pub const DEFAULT_SAMPLE_SIZE: u32 = 50;

/// Root CLI entrypoint for the workflow coordinator.
///
/// All actions are top-level flags rather than subcommands so that creation
/// flags (`--theme`, `--instruments`, `--sample`) can be combined with a view
/// flag (`--status`, `--phase`) in a single invocation.
#[derive(Parser, Debug)]
#[command(
    name = "tgen",
    version,
    about = "Thesis draft workflow coordinator for the social sciences",
    after_help = "Examples:\n  tgen --theme \"Emotional Intelligence and Burnout\" --instruments \"EQ-i,MBI\" --sample 100\n  tgen --full\n  tgen --phase research\n  tgen --status"
)]
pub struct RootArgs {
    /// Research theme (e.g. 'Emotional Intelligence and Academic Burnout')
    #[arg(long, value_name = "TEXT")]
    pub theme: Option<String>,

    /// Comma-separated instrument names (e.g. 'EQ-i,MBI,PSS-10')
    #[arg(long, value_name = "LIST")]
    pub instruments: Option<String>,

    /// Simulated sample size (default: 50)
    #[arg(long, value_name = "N")]
    pub sample: Option<u32>,

    /// Print the instructions for one phase (research, feasibility-research,
    /// simulate, feasibility-data, analyze, write)
    #[arg(long, value_name = "PHASE")]
    pub phase: Option<String>,

    /// Show the full workflow overview
    #[arg(long)]
    pub full: bool,

    /// Show the current configuration and per-phase status
    #[arg(long)]
    pub status: bool,

    /// Load the configuration from an explicit path instead of the run
    /// directory default
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Run directory holding inputs/ and outputs/
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,
}

impl RootArgs {
    /// True when no action flag was given; the dispatcher prints help then.
    ///
    /// `--dir` is context rather than an action, so it does not count.
    pub fn requests_nothing(&self) -> bool {
        self.theme.is_none()
            && self.instruments.is_none()
            && self.sample.is_none()
            && self.phase.is_none()
            && !self.full
            && !self.status
            && self.config.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::RootArgs;
    use clap::Parser;

    #[test]
    fn bare_invocation_requests_nothing() {
        let args = RootArgs::parse_from(["tgen"]);
        assert!(args.requests_nothing());
        let args = RootArgs::parse_from(["tgen", "--dir", "/tmp/run"]);
        assert!(args.requests_nothing());
    }

    #[test]
    fn any_action_flag_counts_as_a_request() {
        for argv in [
            vec!["tgen", "--status"],
            vec!["tgen", "--full"],
            vec!["tgen", "--phase", "research"],
            vec!["tgen", "--theme", "X", "--instruments", "A,B"],
            vec!["tgen", "--config", "/tmp/config.json"],
        ] {
            let args = RootArgs::parse_from(argv.clone());
            assert!(!args.requests_nothing(), "{argv:?}");
        }
    }

    #[test]
    fn sample_defaults_to_none_until_creation() {
        let args = RootArgs::parse_from(["tgen", "--theme", "X", "--instruments", "A"]);
        assert_eq!(args.sample, None);
    }
}
