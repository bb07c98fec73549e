//! Spectrogram splatting.
//!
//! The radial axis is the wave timeline: frame `k` of a wave sits at logical time
//! `k / max_time_index`. A query reads the frame nearest its radius, provided that
//! frame has already surfaced, at the bin of its folded frequency.

use phonowave_spec::{FieldModel, LogicalCoordinate, BIN_COUNT};

use super::FieldStrategy;
use crate::transform::fold_frequency;
use crate::wave::{Wave, WaveState};

/// Field strategy built from surfaced spectrogram frames.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpectrogramStrategy;

impl SpectrogramStrategy {
    /// Creates the strategy.
    pub fn new() -> Self {
        Self
    }

    /// Contribution of one wave at a query point.
    fn contribution(wave: &Wave, bin: usize, time: f64) -> f64 {
        if wave.state() != WaveState::Active {
            return 0.0;
        }
        let index = (time * wave.max_time_index() as f64).round() as usize;
        if index > wave.current_time_index() {
            return 0.0;
        }
        wave.frame(index).map_or(0.0, |frame| frame.raw_energy(bin))
    }
}

impl FieldStrategy for SpectrogramStrategy {
    fn model(&self) -> FieldModel {
        FieldModel::Spectrogram
    }

    fn height_at(&self, waves: &[Wave], _clock: f64, coord: LogicalCoordinate) -> f64 {
        let coord = coord.clamped();
        let (_, spectrum) = fold_frequency(coord.frequency);
        let bin = (spectrum * (BIN_COUNT - 1) as f64).round() as usize;

        waves
            .iter()
            .map(|wave| Self::contribution(wave, bin, coord.time))
            .sum()
    }
}
