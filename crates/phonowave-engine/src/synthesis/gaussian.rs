//! Gaussian spectral peaks on the bin axis.

use phonowave_spec::{hz_to_bin, BIN_SPACING_HZ};

/// Smallest peak width in bins.
const MIN_SIGMA_BINS: f64 = 0.5;

/// Standard deviation of a peak, in bins, for a bandwidth in Hz.
pub fn sigma_bins(bandwidth_hz: f64) -> f64 {
    (bandwidth_hz / 3.0 / BIN_SPACING_HZ).max(MIN_SIGMA_BINS)
}

/// Adds `amplitude * exp(-d² / 2σ²)` around the bin of `center_hz`.
///
/// Only bins within three standard deviations of the (fractional) centre are
/// touched.
pub fn add_gaussian_peak(bins: &mut [f64], center_hz: f64, bandwidth_hz: f64, amplitude: f64) {
    if bins.is_empty() || amplitude == 0.0 {
        return;
    }

    let center = hz_to_bin(center_hz);
    let sigma = sigma_bins(bandwidth_hz);
    let reach = (3.0 * sigma).ceil();
    let lo = (center - reach).floor().max(0.0) as usize;
    let hi = ((center + reach).ceil() as usize).min(bins.len() - 1);

    let two_sigma_sq = 2.0 * sigma * sigma;
    for (index, bin) in bins.iter_mut().enumerate().take(hi + 1).skip(lo) {
        let distance = index as f64 - center;
        *bin += amplitude * (-distance * distance / two_sigma_sq).exp();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonowave_spec::{bin_to_hz, BIN_COUNT};

    #[test]
    fn test_sigma_floor() {
        assert_eq!(sigma_bins(1.0), MIN_SIGMA_BINS);
        assert!((sigma_bins(3.0 * BIN_SPACING_HZ * 4.0) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_peak_centred_on_bin() {
        let mut bins = vec![0.0; BIN_COUNT];
        add_gaussian_peak(&mut bins, bin_to_hz(30), 600.0, 2.0);

        assert!((bins[30] - 2.0).abs() < 1e-9);
        assert!((bins[29] - bins[31]).abs() < 1e-9);
        assert!(bins[29] < bins[30]);
        assert_eq!(bins[0], 0.0);
        assert_eq!(bins[99], 0.0);
    }

    #[test]
    fn test_peak_at_band_edge_is_clipped() {
        let mut bins = vec![0.0; BIN_COUNT];
        add_gaussian_peak(&mut bins, 9000.0, 1200.0, 1.0);
        assert!((bins[99] - 1.0).abs() < 1e-9);
        assert!(bins[98] > 0.0);

        let mut low = vec![0.0; BIN_COUNT];
        add_gaussian_peak(&mut low, 50.0, 1200.0, 1.0);
        assert!((low[0] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_amplitude_is_noop() {
        let mut bins = vec![0.0; BIN_COUNT];
        add_gaussian_peak(&mut bins, 1000.0, 100.0, 0.0);
        assert!(bins.iter().all(|&b| b == 0.0));
    }
}
