//! Workflow orchestration for the coordinator CLI.
//!
//! Each step is intentionally small so the CLI can remain thin: one pass to
//! bootstrap directories, one pass to resolve the configuration, then exactly
//! one view is printed.
mod context;
mod instructions;
mod overview;
mod status;

use crate::cli::RootArgs;
use crate::paths::RunPaths;
use anyhow::Result;
use clap::CommandFactory;

/// Run one invocation end to end.
///
/// Directory bootstrap always happens first, even for help-only runs, so a
/// fresh run directory is usable after any invocation. Views are mutually
/// exclusive and checked in a fixed order: status, then phase instructions,
/// then the overview.
pub fn run(args: &RootArgs) -> Result<()> {
    let paths = RunPaths::new(args.dir.clone());
    paths.ensure_directories()?;

    if args.requests_nothing() {
        RootArgs::command().print_help()?;
        return Ok(());
    }

    let config = context::resolve_config(args, &paths)?;

    if args.status {
        status::print_status(config.as_ref());
        return Ok(());
    }
    if let Some(input) = args.phase.as_deref() {
        instructions::print_instructions(input);
        return Ok(());
    }

    // resolve_config tolerates a missing default config only for --status.
    let Some(config) = config else {
        unreachable!("missing configuration is rejected before dispatch");
    };
    overview::print_overview(&config);
    Ok(())
}
