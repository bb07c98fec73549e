//! Grid command implementation
//!
//! Prints the field's geometry grid points as JSON, the way a presentation layer
//! would consume them once to build its static mesh.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use phonowave_engine::CoordinateTransform;
use phonowave_spec::{DisplayCoordinate, FieldGeometry};
use serde::Serialize;

use super::emit;
use crate::input::load_config;

/// Grid dump written by the command.
#[derive(Debug, Serialize)]
pub struct GridDump {
    pub geometry: FieldGeometry,
    pub freq_steps: usize,
    pub time_steps: usize,
    pub points: Vec<DisplayCoordinate>,
}

/// Builds the grid dump for a geometry.
pub fn build(geometry: FieldGeometry, freq_steps: usize, time_steps: usize) -> GridDump {
    let transform = CoordinateTransform::new(geometry);
    GridDump {
        geometry,
        freq_steps,
        time_steps,
        points: transform.grid(freq_steps, time_steps).collect(),
    }
}

/// Run the grid command
///
/// # Arguments
/// * `config_path` - Optional engine config (for the field geometry)
/// * `freq_steps` - Grid divisions across the wedge
/// * `time_steps` - Grid divisions away from the source
/// * `output` - Output file (default: stdout)
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(
    config_path: Option<&Path>,
    freq_steps: usize,
    time_steps: usize,
    output: Option<&Path>,
) -> Result<ExitCode> {
    let config = load_config(config_path)?;
    let dump = build(config.geometry, freq_steps, time_steps);
    tracing::debug!(points = dump.points.len(), "built field grid");

    let json = serde_json::to_string_pretty(&dump).context("Failed to serialize grid")?;
    emit(&json, output)?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_dump_has_expected_size() {
        let dump = build(FieldGeometry::default(), 8, 5);
        assert_eq!(dump.points.len(), 9 * 5);
    }

    #[test]
    fn grid_writes_json_file() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("grid.json");
        run(None, 2, 2, Some(&out)).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(value["points"].as_array().unwrap().len(), 3 * 2);
        assert_eq!(value["geometry"]["max_radius"], 10.0);
    }
}
