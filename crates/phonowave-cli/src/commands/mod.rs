//! CLI command implementations.

pub mod grid;
pub mod profiles;
pub mod render;
pub mod simulate;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Writes text to a file, or to stdout when no path is given.
pub(crate) fn emit(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            println!("{}", text);
            Ok(())
        }
    }
}
