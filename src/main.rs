use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod paths;
mod phase;
mod render;
mod workflow;

fn main() -> Result<()> {
    init_logging();
    let args = cli::RootArgs::parse();
    workflow::run(&args)
}

/// Diagnostics go to stderr so operator-facing output stays clean on stdout.
/// `RUST_LOG` overrides the default `warn` filter.
fn init_logging() {
    let default_level = "warn";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
