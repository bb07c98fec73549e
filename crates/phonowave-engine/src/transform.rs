//! Coordinate transform between logical and display space.
//!
//! The wedge opens away from the mouth along `+z`. Logical frequency is folded at
//! 0.5: each half is re-normalized to cover the whole band, so the centreline
//! carries the low end of the spectrum on both sides and the wedge edges carry the
//! high end. Logical `f` and `1 - f` land on mirror-image positions.
//!
//! The half-width of the field at radius `r` is `min_mouth_width + r * tan(half_angle_span)`,
//! which stays positive at the origin as long as the mouth has some width.

use phonowave_spec::{DisplayCoordinate, FieldGeometry, LogicalCoordinate, Side};

/// Grid points closer to the source than this logical time are skipped.
pub const GRID_TIME_THRESHOLD: f64 = 0.02;

/// Slack allowed by [`CoordinateTransform::contains`] at the field edges.
const BOUNDS_EPSILON: f64 = 1e-9;

/// Splits a logical frequency into its mirrored half and full-spectrum position.
///
/// The returned spectrum value is 0 on the centreline and 1 at the wedge edge.
pub fn fold_frequency(frequency: f64) -> (Side, f64) {
    let f = LogicalCoordinate::new(frequency, 0.0).frequency;
    if f < 0.5 {
        (Side::Left, (0.5 - f) * 2.0)
    } else {
        (Side::Right, (f - 0.5) * 2.0)
    }
}

/// Inverse of [`fold_frequency`].
pub fn unfold_frequency(side: Side, spectrum: f64) -> f64 {
    let spectrum = spectrum.clamp(0.0, 1.0);
    match side {
        Side::Left => 0.5 - spectrum / 2.0,
        Side::Right => 0.5 + spectrum / 2.0,
    }
}

/// Maps between logical and display coordinates for one field geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransform {
    geometry: FieldGeometry,
    spread_per_radius: f64,
}

impl CoordinateTransform {
    /// Creates a transform for a (validated) geometry.
    pub fn new(geometry: FieldGeometry) -> Self {
        Self {
            geometry,
            spread_per_radius: geometry.half_angle_span.tan(),
        }
    }

    /// The field geometry.
    pub fn geometry(&self) -> &FieldGeometry {
        &self.geometry
    }

    /// Half-width of the field at a radius.
    pub fn half_width_at(&self, radius: f64) -> f64 {
        self.geometry.min_mouth_width + radius.max(0.0) * self.spread_per_radius
    }

    /// Signed polar angle of a logical frequency, in `[-half_angle_span, half_angle_span]`.
    pub fn angle_of(&self, frequency: f64) -> f64 {
        let (side, spectrum) = fold_frequency(frequency);
        side.sign() * spectrum * self.geometry.half_angle_span
    }

    /// Radius of a logical time.
    pub fn radius_of(&self, time: f64) -> f64 {
        LogicalCoordinate::new(0.0, time).time * self.geometry.max_radius
    }

    /// Maps a logical coordinate onto the flat (`y = 0`) field surface.
    pub fn logical_to_display(&self, logical: LogicalCoordinate) -> DisplayCoordinate {
        let logical = logical.clamped();
        let radius = logical.time * self.geometry.max_radius;
        let (side, spectrum) = fold_frequency(logical.frequency);
        let x = side.sign() * self.half_width_at(radius) * spectrum;
        DisplayCoordinate::new(x, 0.0, radius)
    }

    /// Maps a display coordinate back to logical space.
    ///
    /// The half is chosen by the sign of `x`; `y` is ignored. Points outside the
    /// field are clamped onto it.
    pub fn display_to_logical(&self, display: DisplayCoordinate) -> LogicalCoordinate {
        let radius = display.z.clamp(0.0, self.geometry.max_radius);
        let time = radius / self.geometry.max_radius;

        let half_width = self.half_width_at(radius);
        let spectrum = if half_width > 0.0 {
            (display.x.abs() / half_width).min(1.0)
        } else {
            0.0
        };
        let side = if display.x < 0.0 { Side::Left } else { Side::Right };

        LogicalCoordinate::new(unfold_frequency(side, spectrum), time)
    }

    /// Returns true if a display coordinate lies on the field.
    pub fn contains(&self, display: DisplayCoordinate) -> bool {
        if !display.x.is_finite() || !display.z.is_finite() {
            return false;
        }
        let max_radius = self.geometry.max_radius;
        if display.z < -BOUNDS_EPSILON || display.z > max_radius + BOUNDS_EPSILON {
            return false;
        }
        display.x.abs() <= self.half_width_at(display.z) + BOUNDS_EPSILON
    }

    /// Regular grid over the logical domain, in display space.
    ///
    /// Produces `(freq_steps + 1) * (time_steps + 1)` points minus the rows nearer the
    /// source than [`GRID_TIME_THRESHOLD`]. Step counts below 1 are treated as 1.
    pub fn grid(&self, freq_steps: usize, time_steps: usize) -> GridPoints {
        GridPoints {
            transform: *self,
            freq_steps: freq_steps.max(1),
            time_steps: time_steps.max(1),
            freq_index: 0,
            time_index: 0,
        }
    }
}

impl Default for CoordinateTransform {
    fn default() -> Self {
        Self::new(FieldGeometry::default())
    }
}

/// Iterator over grid points produced by [`CoordinateTransform::grid`].
///
/// Rows run outward from the source; within a row, frequency runs left to right
/// in logical order.
#[derive(Debug, Clone)]
pub struct GridPoints {
    transform: CoordinateTransform,
    freq_steps: usize,
    time_steps: usize,
    freq_index: usize,
    time_index: usize,
}

impl GridPoints {
    /// Logical coordinate of the next point, advancing the cursor.
    fn next_logical(&mut self) -> Option<LogicalCoordinate> {
        while self.time_index <= self.time_steps {
            let time = self.time_index as f64 / self.time_steps as f64;
            if time < GRID_TIME_THRESHOLD {
                self.time_index += 1;
                self.freq_index = 0;
                continue;
            }

            let frequency = self.freq_index as f64 / self.freq_steps as f64;
            self.freq_index += 1;
            if self.freq_index > self.freq_steps {
                self.freq_index = 0;
                self.time_index += 1;
            }
            return Some(LogicalCoordinate::new(frequency, time));
        }
        None
    }
}

impl Iterator for GridPoints {
    type Item = DisplayCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_logical()
            .map(|logical| self.transform.logical_to_display(logical))
    }
}
