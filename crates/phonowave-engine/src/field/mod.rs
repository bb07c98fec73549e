//! Field sampling strategies.
//!
//! A strategy turns the set of live waves into a height value at any logical
//! coordinate, so a presentation layer can deform mesh vertices that do not sit on
//! any grid. Both strategies fold the query frequency across the centreline, so the
//! two mirrored halves of the field always respond identically to a wave.
//!
//! - [`SpectrogramStrategy`] - splats surfaced spectrogram frames along the radial axis
//! - [`WedgeStrategy`] - analytic ripple travelling outward from the mouth

mod spectrogram;
mod wedge;

pub use spectrogram::SpectrogramStrategy;
pub use wedge::WedgeStrategy;

use phonowave_spec::{EngineConfig, FieldModel, LogicalCoordinate};

use crate::wave::Wave;

/// Common trait for field sampling strategies.
pub trait FieldStrategy {
    /// Which model this strategy implements.
    fn model(&self) -> FieldModel;

    /// Height of the field at a logical coordinate.
    ///
    /// # Arguments
    /// * `waves` - Live waves (expired waves contribute nothing)
    /// * `clock` - Current simulation clock in seconds
    /// * `coord` - Query point; clamped to [0, 1] before use
    fn height_at(&self, waves: &[Wave], clock: f64, coord: LogicalCoordinate) -> f64;
}

/// Strategy selected from an [`EngineConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum Strategy {
    /// Spectrogram splatting.
    Spectrogram(SpectrogramStrategy),
    /// Analytic wedge ripple.
    Wedge(WedgeStrategy),
}

impl Strategy {
    /// Builds the strategy named by `config.model`.
    pub fn from_config(config: &EngineConfig) -> Self {
        match config.model {
            FieldModel::Spectrogram => Strategy::Spectrogram(SpectrogramStrategy::new()),
            FieldModel::Wedge => Strategy::Wedge(WedgeStrategy::new(
                config.wedge,
                config.geometry,
                config.frame_rate,
            )),
        }
    }
}

impl FieldStrategy for Strategy {
    fn model(&self) -> FieldModel {
        match self {
            Strategy::Spectrogram(s) => s.model(),
            Strategy::Wedge(s) => s.model(),
        }
    }

    fn height_at(&self, waves: &[Wave], clock: f64, coord: LogicalCoordinate) -> f64 {
        match self {
            Strategy::Spectrogram(s) => s.height_at(waves, clock, coord),
            Strategy::Wedge(s) => s.height_at(waves, clock, coord),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_follows_config() {
        let config = EngineConfig::default();
        assert_eq!(Strategy::from_config(&config).model(), FieldModel::Spectrogram);

        let config = config.with_model(FieldModel::Wedge);
        assert_eq!(Strategy::from_config(&config).model(), FieldModel::Wedge);
    }

    #[test]
    fn test_empty_field_is_flat() {
        for model in [FieldModel::Spectrogram, FieldModel::Wedge] {
            let strategy = Strategy::from_config(&EngineConfig::default().with_model(model));
            let h = strategy.height_at(&[], 1.0, LogicalCoordinate::new(0.3, 0.6));
            assert_eq!(h, 0.0);
        }
    }
}
