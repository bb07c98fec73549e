//! Audible band constants and conversions.
//!
//! The field covers a fixed band from [`F_MIN_HZ`] to [`F_MAX_HZ`], split into
//! [`BIN_COUNT`] linearly spaced bins. Normalized frequency 0 is the low end of the
//! band and 1 the high end.

/// Low end of the audible band in Hz.
pub const F_MIN_HZ: f64 = 100.0;

/// High end of the audible band in Hz.
pub const F_MAX_HZ: f64 = 8000.0;

/// Number of frequency bins in a spectrogram frame.
pub const BIN_COUNT: usize = 100;

/// Distance between adjacent bin centres in Hz.
pub const BIN_SPACING_HZ: f64 = (F_MAX_HZ - F_MIN_HZ) / (BIN_COUNT - 1) as f64;

/// Converts a normalized frequency to Hz. Input is clamped to [0, 1].
pub fn frequency_to_hz(frequency: f64) -> f64 {
    F_MIN_HZ + clamp_unit(frequency) * (F_MAX_HZ - F_MIN_HZ)
}

/// Converts Hz to a normalized frequency in [0, 1].
pub fn hz_to_frequency(hz: f64) -> f64 {
    clamp_unit((hz - F_MIN_HZ) / (F_MAX_HZ - F_MIN_HZ))
}

/// Maps a frequency in Hz onto the fractional bin axis `[0, BIN_COUNT - 1]`.
///
/// Frequencies outside the band land on the first or last bin.
pub fn hz_to_bin(hz: f64) -> f64 {
    hz_to_frequency(hz) * (BIN_COUNT - 1) as f64
}

/// Centre frequency of a bin in Hz.
pub fn bin_to_hz(bin: usize) -> f64 {
    F_MIN_HZ + bin.min(BIN_COUNT - 1) as f64 * BIN_SPACING_HZ
}

/// Clamps a value to [0, 1]. NaN maps to 0.
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(frequency_to_hz(0.0), F_MIN_HZ);
        assert_eq!(frequency_to_hz(1.0), F_MAX_HZ);
        assert_eq!(hz_to_frequency(F_MIN_HZ), 0.0);
        assert_eq!(hz_to_frequency(F_MAX_HZ), 1.0);
    }

    #[test]
    fn test_out_of_band_is_clamped() {
        assert_eq!(hz_to_frequency(20.0), 0.0);
        assert_eq!(hz_to_frequency(20000.0), 1.0);
        assert_eq!(frequency_to_hz(-3.0), F_MIN_HZ);
        assert_eq!(frequency_to_hz(f64::NAN), F_MIN_HZ);
    }

    #[test]
    fn test_bin_mapping() {
        assert_eq!(hz_to_bin(F_MIN_HZ), 0.0);
        assert!((hz_to_bin(F_MAX_HZ) - 99.0).abs() < 1e-9);
        assert!((bin_to_hz(99) - F_MAX_HZ).abs() < 1e-9);
        // Roughly 80 Hz per bin
        assert!((BIN_SPACING_HZ - 79.8).abs() < 0.1);
        for bin in [0, 17, 50, 99] {
            assert!((hz_to_bin(bin_to_hz(bin)) - bin as f64).abs() < 1e-9);
        }
    }
}
