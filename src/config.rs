//! Study configuration: the one record this tool persists.
//!
//! The record captures what the operator asked for (theme, instruments,
//! sample size) plus a per-phase status map that external tooling advances.
//! Persistence is whole-file JSON with no merging or versioning.
use crate::phase::{Phase, PhaseState, PHASES};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// The persisted study record.
///
/// `created` is set once at creation and never updated; saving always
/// replaces the whole file. `phases` is keyed by [`Phase`], so it serializes
/// in workflow order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StudyConfig {
    pub theme: String,
    pub instruments: Vec<String>,
    pub sample_size: u32,
    pub created: String,
    pub phases: BTreeMap<Phase, PhaseState>,
}

impl StudyConfig {
    /// Build a fresh record: creation stamp now, all six phases pending.
    pub fn new(theme: &str, instruments: Vec<String>, sample_size: u32) -> Self {
        let phases = PHASES
            .iter()
            .map(|phase| (*phase, PhaseState::pending()))
            .collect();
        Self {
            theme: theme.to_string(),
            instruments,
            sample_size,
            created: chrono::Local::now().to_rfc3339(),
            phases,
        }
    }

    /// Status string for one phase; `unknown` when the key is absent.
    ///
    /// Absence is not an error: older or hand-edited records may lack keys,
    /// and status display should still work.
    pub fn phase_status(&self, phase: Phase) -> &str {
        self.phases
            .get(&phase)
            .map_or("unknown", |state| state.status.as_str())
    }
}

/// Split a comma-separated instrument list into trimmed tokens.
///
/// Order and duplicates are preserved, and no token validation happens here:
/// instrument names are opaque to the coordinator.
pub fn parse_instruments(raw: &str) -> Vec<String> {
    raw.split(',').map(|token| token.trim().to_string()).collect()
}

/// Load a configuration record from `path`.
pub fn load_config(path: &Path) -> Result<StudyConfig> {
    let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let config: StudyConfig =
        serde_json::from_slice(&bytes).with_context(|| format!("parse config {}", path.display()))?;
    Ok(config)
}

/// Persist a configuration record to `path` as pretty JSON.
///
/// Overwrites unconditionally; the previous record, including any phase
/// progress recorded by external tooling, is replaced.
pub fn save_config(path: &Path, config: &StudyConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let text = serde_json::to_string_pretty(config).context("serialize config")?;
    fs::write(path, text.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
