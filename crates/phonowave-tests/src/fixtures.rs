//! Test fixture utilities: temp workspaces with scripts and configs.

use std::fs;
use std::path::{Path, PathBuf};

use phonowave_engine::WaveEngine;
use tempfile::TempDir;

/// Script that triggers one wave of each type and resets midway.
pub const MIXED_SCRIPT: &str = r#"[
    { "at": 0.0, "trigger": "vowel" },
    { "at": 0.1, "trigger": "trill" },
    { "at": 0.2, "trigger": "fricative" },
    { "at": 0.3, "trigger": "plosive" },
    { "at": 1.0, "reset": true },
    { "at": 1.0, "trigger": "vowel" }
]"#;

/// Config selecting the wedge ripple model.
pub const WEDGE_CONFIG: &str = r#"{ "seed": 7, "model": "wedge" }"#;

/// A temporary directory holding CLI inputs and outputs.
pub struct Workspace {
    pub root: TempDir,
}

impl Workspace {
    /// Create a new empty workspace.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        Self { root }
    }

    /// Get the workspace root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Write a file into the workspace and return its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// Path for an output file (not created).
    pub fn output(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Ticks the engine by `dt` until no waves remain, up to `max_ticks`.
///
/// Returns the number of ticks taken, or `None` if waves were still active.
pub fn run_until_idle(engine: &mut WaveEngine, dt: f64, max_ticks: usize) -> Option<usize> {
    for tick in 1..=max_ticks {
        engine.update_time(dt);
        if engine.active_wave_count() == 0 {
            return Some(tick);
        }
    }
    None
}
