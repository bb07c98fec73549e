//! Spectrogram frame synthesis.
//!
//! A frame is built in a fixed order:
//! 1. envelope gain from the profile timeline
//! 2. trill modulation (trills only)
//! 3. one Gaussian bump per peak frequency
//! 4. broadband noise (fricatives only)
//! 5. normalization by the frame maximum
//!
//! Steps 1-4 are exposed separately through [`Synthesizer::raw_energies`] so the
//! unnormalized shape can be inspected.

mod gaussian;

#[cfg(test)]
mod tests;

pub use gaussian::{add_gaussian_peak, sigma_bins};

use phonowave_spec::{profile_for, PhoneticProfile, PhoneticType, SpectrogramFrame, BIN_COUNT};
use rand::Rng;
use rand_pcg::Pcg32;

use crate::envelope::{envelope_at, trill_modulation};

/// Scale of the fricative noise relative to the envelope.
pub const NOISE_SCALE: f64 = 0.1;

/// Synthesizes spectrogram frames for phonetic profiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Synthesizer {
    frame_rate: f64,
}

impl Synthesizer {
    /// Creates a synthesizer for a wave timeline running at `frame_rate` frames per second.
    pub fn new(frame_rate: f64) -> Self {
        Self { frame_rate }
    }

    /// Frames per second of the wave timeline.
    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    /// Envelope gain for a frame, including trill modulation.
    pub fn envelope(
        &self,
        kind: PhoneticType,
        time_index: usize,
        profile: &PhoneticProfile,
    ) -> f64 {
        let mut gain = envelope_at(profile, time_index as f64);
        if kind == PhoneticType::Trill {
            let rate = profile.modulation_rate.unwrap_or(0.0);
            let seconds = time_index as f64 / self.frame_rate;
            gain *= trill_modulation(rate, seconds);
        }
        gain
    }

    /// Unnormalized bin energies for a frame.
    ///
    /// Fricatives draw one noise sample per bin from `rng`; other types leave it
    /// untouched.
    pub fn raw_energies(
        &self,
        kind: PhoneticType,
        time_index: usize,
        profile: &PhoneticProfile,
        rng: &mut Pcg32,
    ) -> Vec<f64> {
        let gain = self.envelope(kind, time_index, profile);
        let mut bins = vec![0.0; BIN_COUNT];

        for &hz in profile.peak_frequencies {
            add_gaussian_peak(&mut bins, hz, profile.bandwidth, profile.amplitude * gain);
        }

        if kind == PhoneticType::Fricative {
            let noise_level = NOISE_SCALE * gain;
            for bin in bins.iter_mut() {
                *bin += rng.gen::<f64>() * noise_level;
            }
        }

        bins
    }

    /// Synthesizes one normalized frame.
    pub fn synthesize_frame(
        &self,
        kind: PhoneticType,
        time_index: usize,
        profile: &PhoneticProfile,
        rng: &mut Pcg32,
    ) -> SpectrogramFrame {
        let mut bins = self.raw_energies(kind, time_index, profile, rng);
        let peak = normalize(&mut bins);
        SpectrogramFrame {
            time_index,
            bins,
            peak,
        }
    }

    /// Synthesizes every frame of a wave, from index 0 to `floor(duration)` inclusive.
    pub fn synthesize_wave(&self, kind: PhoneticType, rng: &mut Pcg32) -> Vec<SpectrogramFrame> {
        let profile = profile_for(kind);
        (0..=profile.max_time_index())
            .map(|time_index| self.synthesize_frame(kind, time_index, profile, rng))
            .collect()
    }
}

/// Divides every bin by the maximum and clamps to [0, 1].
///
/// Returns the maximum. An all-zero (or all-negative) frame is left as zeros and
/// reports a peak of 0.
pub fn normalize(bins: &mut [f64]) -> f64 {
    let peak = bins.iter().copied().fold(0.0_f64, f64::max);
    if peak > 0.0 {
        for bin in bins.iter_mut() {
            *bin = (*bin / peak).clamp(0.0, 1.0);
        }
    } else {
        for bin in bins.iter_mut() {
            *bin = 0.0;
        }
    }
    peak
}
