//! Typed paths into a run directory.
//!
//! Centralizing path construction keeps file access consistent across the
//! workflow and makes the storage root an injected value instead of a
//! process-wide constant.
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Output subdirectories created by the bootstrap, relative to `outputs/`.
///
/// One directory per artifact family; `thesis/chapters` nests under
/// `thesis` for the per-chapter drafts.
const OUTPUT_SUBDIRS: [&str; 6] = [
    "research",
    "feasibility",
    "data",
    "analysis",
    "thesis",
    "thesis/chapters",
];

/// Convenience wrapper for locating the well-known files and directories of
/// one run directory.
#[derive(Debug, Clone)]
pub struct RunPaths {
    root: PathBuf,
}

impl RunPaths {
    /// Create a new path helper rooted at the run directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Return the `inputs/` directory path.
    pub fn inputs_dir(&self) -> PathBuf {
        self.root.join("inputs")
    }

    /// Return the `inputs/config.json` path, the singleton configuration.
    pub fn config_path(&self) -> PathBuf {
        self.inputs_dir().join("config.json")
    }

    /// Return the `outputs/` root written by the external skills.
    pub fn outputs_dir(&self) -> PathBuf {
        self.root.join("outputs")
    }

    /// Create the fixed output tree and the inputs directory.
    ///
    /// Idempotent: directories that already exist are left untouched, and
    /// nothing inside them is ever written or removed here.
    pub fn ensure_directories(&self) -> Result<()> {
        for rel in OUTPUT_SUBDIRS {
            let dir = self.outputs_dir().join(rel);
            fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        }
        let inputs = self.inputs_dir();
        fs::create_dir_all(&inputs).with_context(|| format!("create {}", inputs.display()))?;
        tracing::debug!(root = %self.root.display(), "run directory bootstrapped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::RunPaths;

    #[test]
    fn config_lives_under_inputs() {
        let paths = RunPaths::new("/tmp/run".into());
        assert_eq!(paths.inputs_dir(), std::path::Path::new("/tmp/run/inputs"));
        assert_eq!(
            paths.config_path(),
            std::path::Path::new("/tmp/run/inputs/config.json")
        );
        assert_eq!(paths.outputs_dir(), std::path::Path::new("/tmp/run/outputs"));
    }

    #[test]
    fn bootstrap_creates_the_full_tree_and_is_idempotent() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let paths = RunPaths::new(dir.path().to_path_buf());
        paths.ensure_directories().expect("first bootstrap");
        paths.ensure_directories().expect("second bootstrap");
        for rel in [
            "inputs",
            "outputs/research",
            "outputs/feasibility",
            "outputs/data",
            "outputs/analysis",
            "outputs/thesis",
            "outputs/thesis/chapters",
        ] {
            assert!(dir.path().join(rel).is_dir(), "{rel} missing");
        }
    }

    #[test]
    fn bootstrap_leaves_existing_files_alone() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let paths = RunPaths::new(dir.path().to_path_buf());
        paths.ensure_directories().expect("bootstrap");
        let marker = dir.path().join("outputs/research/literature_review.md");
        std::fs::write(&marker, "draft").expect("write marker");
        paths.ensure_directories().expect("re-bootstrap");
        let content = std::fs::read_to_string(&marker).expect("read marker");
        assert_eq!(content, "draft");
    }
}
