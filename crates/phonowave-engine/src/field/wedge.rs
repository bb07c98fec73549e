//! Analytic wedge ripple.
//!
//! Each wave is a ring travelling outward at `wave_speed`, confined to an angular
//! lobe around the angle of its primary peak frequency:
//!
//! ```text
//! h = envelope × angular × radial × sin(f0 / 100 × d × π)
//! ```
//!
//! where `d` is the radial distance from the wavefront, `angular` a raised-cosine
//! window over the angular distance from the lobe centre and `radial` an
//! exponential falloff in `d`.

use std::f64::consts::PI;

use phonowave_spec::{
    hz_to_frequency, FieldGeometry, FieldModel, LogicalCoordinate, WedgeParams, F_MAX_HZ, F_MIN_HZ,
};

use super::FieldStrategy;
use crate::envelope::envelope_at;
use crate::transform::fold_frequency;
use crate::wave::Wave;

/// Narrowest lobe as a fraction of the half angle span.
const MIN_SPREAD_FRACTION: f64 = 0.15;

/// Field strategy producing an analytic ripple surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WedgeStrategy {
    params: WedgeParams,
    half_angle_span: f64,
    max_radius: f64,
    frame_rate: f64,
}

impl WedgeStrategy {
    /// Creates the strategy.
    pub fn new(params: WedgeParams, geometry: FieldGeometry, frame_rate: f64) -> Self {
        Self {
            params,
            half_angle_span: geometry.half_angle_span,
            max_radius: geometry.max_radius,
            frame_rate,
        }
    }

    /// Angular half-width of a wave's lobe.
    pub fn spread(&self, wave: &Wave) -> f64 {
        let profile = wave.kind().profile();
        let relative_bandwidth = profile.bandwidth / (F_MAX_HZ - F_MIN_HZ);
        let spread = self.params.spread_scale * self.half_angle_span * relative_bandwidth;
        spread.max(MIN_SPREAD_FRACTION * self.half_angle_span)
    }

    /// Unsigned angle of a wave's lobe centre.
    pub fn center_angle(&self, wave: &Wave) -> f64 {
        let primary = wave.kind().profile().primary_frequency();
        hz_to_frequency(primary) * self.half_angle_span
    }

    /// Radius of a wave's front at a clock value.
    pub fn front_radius(&self, wave: &Wave, clock: f64) -> f64 {
        wave.age(clock) * self.params.wave_speed
    }

    fn contribution(&self, wave: &Wave, clock: f64, angle: f64, radius: f64) -> f64 {
        if !wave.is_active() {
            return 0.0;
        }

        let spread = self.spread(wave);
        let angular_distance = (angle - self.center_angle(wave)).abs();
        if angular_distance >= spread {
            return 0.0;
        }
        let angular = 0.5 * (1.0 + (PI * angular_distance / spread).cos());

        let profile = wave.kind().profile();
        let envelope = envelope_at(profile, wave.age(clock) * self.frame_rate);
        if envelope == 0.0 {
            return 0.0;
        }

        let distance = (radius - self.front_radius(wave, clock)).abs();
        let radial = (-distance / self.params.radial_decay).exp();
        let oscillation = (profile.primary_frequency() / 100.0 * distance * PI).sin();

        envelope * angular * radial * oscillation
    }
}

impl FieldStrategy for WedgeStrategy {
    fn model(&self) -> FieldModel {
        FieldModel::Wedge
    }

    fn height_at(&self, waves: &[Wave], clock: f64, coord: LogicalCoordinate) -> f64 {
        let coord = coord.clamped();
        let (_, spectrum) = fold_frequency(coord.frequency);
        let angle = spectrum * self.half_angle_span;
        let radius = coord.time * self.max_radius;

        waves
            .iter()
            .map(|wave| self.contribution(wave, clock, angle, radius))
            .sum()
    }
}
