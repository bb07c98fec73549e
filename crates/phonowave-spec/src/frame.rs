//! Spectrogram frame type.

use serde::{Deserialize, Serialize};

use crate::band::{hz_to_bin, BIN_COUNT};

/// One synthesized time slice of a wave's spectrogram.
///
/// `bins` holds [`BIN_COUNT`] normalized energies in [0, 1]. `peak` is the
/// maximum raw energy the bins were divided by, so `bins[i] * peak` recovers the
/// unnormalized energy. Silent frames have all-zero bins and a zero peak.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrogramFrame {
    /// Frame index within the wave timeline.
    pub time_index: usize,
    /// Normalized bin energies, lowest frequency first.
    pub bins: Vec<f64>,
    /// Pre-normalization maximum energy.
    pub peak: f64,
}

impl SpectrogramFrame {
    /// Creates an all-zero frame.
    pub fn silent(time_index: usize) -> Self {
        Self {
            time_index,
            bins: vec![0.0; BIN_COUNT],
            peak: 0.0,
        }
    }

    /// Returns true if every bin is zero.
    pub fn is_silent(&self) -> bool {
        self.bins.iter().all(|&b| b == 0.0)
    }

    /// Normalized energy of a bin. Out-of-range bins read as 0.
    pub fn bin(&self, index: usize) -> f64 {
        self.bins.get(index).copied().unwrap_or(0.0)
    }

    /// Normalized energy of the bin nearest to a frequency in Hz.
    pub fn energy_at_hz(&self, hz: f64) -> f64 {
        self.bin(hz_to_bin(hz).round() as usize)
    }

    /// Unnormalized energy of a bin.
    pub fn raw_energy(&self, index: usize) -> f64 {
        self.bin(index) * self.peak
    }

    /// Index of the loudest bin, or `None` for a silent frame.
    pub fn loudest_bin(&self) -> Option<usize> {
        if self.is_silent() {
            return None;
        }
        self.bins
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_frame() {
        let frame = SpectrogramFrame::silent(3);
        assert_eq!(frame.bins.len(), BIN_COUNT);
        assert!(frame.is_silent());
        assert_eq!(frame.loudest_bin(), None);
        assert_eq!(frame.raw_energy(10), 0.0);
    }

    #[test]
    fn test_bin_access() {
        let mut frame = SpectrogramFrame::silent(0);
        frame.bins[8] = 1.0;
        frame.bins[9] = 0.5;
        frame.peak = 2.0;

        assert_eq!(frame.loudest_bin(), Some(8));
        assert_eq!(frame.raw_energy(9), 1.0);
        assert_eq!(frame.bin(BIN_COUNT + 5), 0.0);
        // Bin 8 is centred near 738 Hz
        assert_eq!(frame.energy_at_hz(740.0), 1.0);
    }
}
