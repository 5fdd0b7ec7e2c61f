use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Manifest file name used when none is configured.
pub const DEFAULT_MANIFEST: &str = "Cargo.toml";

/// Upper bound on captured `git diff` output.
pub const DEFAULT_MAX_DIFF_BYTES: usize = 10 * 1024 * 1024;

/// Settings for collecting package inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File that marks a directory as a package.
    pub manifest: String,
    /// Program used to compute working-tree diffs; `None` disables diffing.
    pub git: Option<PathBuf>,
    /// Diff output beyond this many bytes makes the diff absent.
    pub max_diff_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest: DEFAULT_MANIFEST.to_string(),
            git: Some(PathBuf::from("git")),
            max_diff_bytes: DEFAULT_MAX_DIFF_BYTES,
        }
    }
}

impl Config {
    pub fn with_manifest(mut self, manifest: impl Into<String>) -> Self {
        self.manifest = manifest.into();
        self
    }

    pub fn with_git(mut self, program: impl Into<PathBuf>) -> Self {
        self.git = Some(program.into());
        self
    }

    pub fn without_diff(mut self) -> Self {
        self.git = None;
        self
    }

    pub fn with_max_diff_bytes(mut self, max: usize) -> Self {
        self.max_diff_bytes = max;
        self
    }
}
