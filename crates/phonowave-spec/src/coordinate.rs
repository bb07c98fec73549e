//! Logical and display coordinates.

use serde::{Deserialize, Serialize};

use crate::band::clamp_unit;

/// Normalized field position independent of any world unit.
///
/// `frequency` runs across the wedge (0.5 is the centreline), `time` runs away
/// from the mouth (0 at the source, 1 at maximum propagation distance). Both
/// fields are clamped to [0, 1] on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogicalCoordinate {
    /// Lateral field position in [0, 1].
    pub frequency: f64,
    /// Radial field position in [0, 1].
    pub time: f64,
}

impl LogicalCoordinate {
    /// Creates a logical coordinate, clamping both fields to [0, 1].
    pub fn new(frequency: f64, time: f64) -> Self {
        Self {
            frequency: clamp_unit(frequency),
            time: clamp_unit(time),
        }
    }

    /// Returns a copy with both fields clamped to [0, 1].
    ///
    /// Coordinates built with a struct literal or deserialized from JSON may hold
    /// out-of-range values; every consumer clamps before use.
    pub fn clamped(self) -> Self {
        Self::new(self.frequency, self.time)
    }

    /// The logical coordinate mirrored across the field centreline.
    pub fn mirrored(self) -> Self {
        Self::new(1.0 - self.frequency, self.time)
    }
}

/// Spatial position in the field.
///
/// `x` is the lateral offset from the centreline, `y` the wave height and `z` the
/// distance from the source.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DisplayCoordinate {
    /// Lateral offset.
    pub x: f64,
    /// Height (wave amplitude).
    pub y: f64,
    /// Radial distance from the source.
    pub z: f64,
}

impl DisplayCoordinate {
    /// Creates a display coordinate.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns a copy with the height replaced.
    pub fn with_height(self, y: f64) -> Self {
        Self { y, ..self }
    }
}

/// Half of the bilaterally mirrored field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Negative lateral offsets (logical frequency below 0.5).
    Left,
    /// Non-negative lateral offsets (logical frequency 0.5 and above).
    Right,
}

impl Side {
    /// Sign applied to angles and lateral offsets on this side.
    pub fn sign(self) -> f64 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_clamps() {
        let coord = LogicalCoordinate::new(-0.5, 1.7);
        assert_eq!(coord, LogicalCoordinate { frequency: 0.0, time: 1.0 });
    }

    #[test]
    fn test_clamped_handles_literals() {
        let coord = LogicalCoordinate {
            frequency: 2.0,
            time: f64::NAN,
        };
        assert_eq!(coord.clamped(), LogicalCoordinate::new(1.0, 0.0));
    }

    #[test]
    fn test_mirrored() {
        let coord = LogicalCoordinate::new(0.2, 0.4);
        let mirrored = coord.mirrored();
        assert!((mirrored.frequency - 0.8).abs() < 1e-12);
        assert_eq!(mirrored.time, 0.4);
    }

    #[test]
    fn test_display_with_height() {
        let point = DisplayCoordinate::new(1.0, 0.0, 3.0).with_height(0.25);
        assert_eq!(point, DisplayCoordinate::new(1.0, 0.25, 3.0));
    }

    #[test]
    fn test_side_serde() {
        assert_eq!(serde_json::to_string(&Side::Left).unwrap(), "\"left\"");
        assert_eq!(Side::Left.sign(), -1.0);
        assert_eq!(Side::Right.sign(), 1.0);
    }
}
