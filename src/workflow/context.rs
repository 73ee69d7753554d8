//! Configuration resolution for one invocation.
//!
//! Resolution order is fixed: creation flags win over an explicit `--config`
//! path, which wins over the run directory default. Only the default path
//! gets the missing-file leniency, and only for `--status`.
use crate::cli::{RootArgs, DEFAULT_SAMPLE_SIZE};
use crate::config::{load_config, parse_instruments, save_config, StudyConfig};
use crate::paths::RunPaths;
use anyhow::{bail, Result};

/// Resolve the active configuration for this invocation.
///
/// With `--theme` and `--instruments` a new record is created and saved to
/// the run directory before anything is printed. `Ok(None)` is returned only
/// when the default config file is missing and the operator asked for
/// `--status`; every other missing-configuration case fails with a
/// corrective hint.
pub(super) fn resolve_config(args: &RootArgs, paths: &RunPaths) -> Result<Option<StudyConfig>> {
    if let (Some(theme), Some(instruments)) = (args.theme.as_deref(), args.instruments.as_deref())
    {
        let instruments = parse_instruments(instruments);
        let sample_size = args.sample.unwrap_or(DEFAULT_SAMPLE_SIZE);
        let config = StudyConfig::new(theme, instruments, sample_size);
        let path = paths.config_path();
        save_config(&path, &config)?;
        println!("Configuration saved to {}", path.display());
        tracing::info!(path = %path.display(), sample_size, "configuration created");
        return Ok(Some(config));
    }

    if let Some(path) = args.config.as_deref() {
        return Ok(Some(load_config(path)?));
    }

    let path = paths.config_path();
    if !path.is_file() {
        if args.status {
            return Ok(None);
        }
        bail!(
            "no configuration found at {} (run `tgen --theme \"Your Theme\" --instruments \"SCALE1,SCALE2\"` first)",
            path.display()
        );
    }
    let config = load_config(&path)?;
    tracing::debug!(path = %path.display(), "configuration loaded");
    Ok(Some(config))
}
