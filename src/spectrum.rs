//! Spectral density estimation via FFT.
//!
//! Magnitudes are normalized by the transform length and log-compressed with
//! `log1p(magnitude²)`, a visualization-oriented density rather than a
//! statistical one. Only strictly positive frequency bins are kept (DC and
//! the mirror half are discarded).

use num_complex::Complex;
use rustfft::FftPlanner;
use serde::Serialize;

use crate::error::ExplorerError;

/// Bin spacing used for frequency computation.
///
/// The reference behavior uses unit sample spacing rather than the sample
/// domain's real time step. Kept for compatibility; see the spacing test in
/// `tests/pipeline_tests.rs`.
const SAMPLE_SPACING: f64 = 1.0;

/// Log-compressed magnitude spectrum restricted to strictly positive
/// frequencies, ordered ascending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpectralDensity {
    pub frequencies: Vec<f64>,
    pub densities: Vec<f64>,
}

impl SpectralDensity {
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Frequency of the bin with the highest density, if any bins exist.
    pub fn dominant_frequency(&self) -> Option<f64> {
        self.frequencies
            .iter()
            .zip(self.densities.iter())
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(&freq, _)| freq)
    }
}

/// Compute the frequency-domain magnitude density of a wave.
///
/// Forward FFT, magnitude of each coefficient divided by the wave length,
/// then `density = ln(1 + magnitude²)`. Bin `k` maps to frequency
/// `k / (len * spacing)`; only bins with strictly positive frequency are
/// retained, which for length `m` leaves `(m - 1) / 2` bins (the even-length
/// Nyquist bin belongs to the negative side and is dropped with the mirror).
///
/// Fails with [`ExplorerError::InvalidParameter`] only when the wave is empty.
pub fn compute_spectral_density(wave: &[f64]) -> Result<SpectralDensity, ExplorerError> {
    let len = wave.len();
    if len == 0 {
        return Err(ExplorerError::InvalidParameter(
            "cannot compute spectral density of an empty wave".to_string(),
        ));
    }

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(len);

    let mut buffer: Vec<Complex<f64>> = wave.iter().map(|&s| Complex::new(s, 0.0)).collect();
    fft.process(&mut buffer);

    let positive_bins = (len - 1) / 2;
    let mut frequencies = Vec::with_capacity(positive_bins);
    let mut densities = Vec::with_capacity(positive_bins);
    for k in 1..=positive_bins {
        let magnitude = buffer[k].norm() / len as f64;
        frequencies.push(k as f64 / (len as f64 * SAMPLE_SPACING));
        densities.push((magnitude * magnitude).ln_1p());
    }

    Ok(SpectralDensity {
        frequencies,
        densities,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn sine_wave(len: usize, cycles: f64) -> Vec<f64> {
        (0..len)
            .map(|i| (2.0 * PI * cycles * i as f64 / len as f64).sin())
            .collect()
    }

    #[test]
    fn test_empty_wave_rejected() {
        assert!(compute_spectral_density(&[]).is_err());
    }

    #[test]
    fn test_frequencies_strictly_positive_and_ascending() {
        let density = compute_spectral_density(&sine_wave(1000, 5.0)).unwrap();
        assert!(!density.is_empty());
        assert!(density.frequencies[0] > 0.0, "no DC bin allowed");
        for pair in density.frequencies.windows(2) {
            assert!(pair[1] > pair[0], "frequencies must ascend strictly");
        }
    }

    #[test]
    fn test_densities_non_negative() {
        let density = compute_spectral_density(&sine_wave(512, 3.0)).unwrap();
        assert!(density.densities.iter().all(|&d| d >= 0.0));
    }

    #[test]
    fn test_bin_count_at_most_half() {
        for len in [2, 3, 100, 101, 1000] {
            let density = compute_spectral_density(&vec![1.0; len]).unwrap();
            assert_eq!(density.len(), (len - 1) / 2);
            assert!(density.len() <= len / 2);
        }
    }

    #[test]
    fn test_paired_lengths_match() {
        let density = compute_spectral_density(&sine_wave(777, 7.0)).unwrap();
        assert_eq!(density.frequencies.len(), density.densities.len());
    }

    #[test]
    fn test_sine_peaks_at_its_bin() {
        // 5 full cycles over 1000 samples concentrates energy in bin 5,
        // which sits at frequency 5/1000 under unit spacing.
        let density = compute_spectral_density(&sine_wave(1000, 5.0)).unwrap();
        let dominant = density.dominant_frequency().unwrap();
        assert!((dominant - 0.005).abs() < 1e-12, "dominant at {}", dominant);
    }

    #[test]
    fn test_silence_has_zero_density() {
        let density = compute_spectral_density(&vec![0.0; 256]).unwrap();
        assert!(density.densities.iter().all(|&d| d == 0.0));
    }

    #[test]
    fn test_deterministic() {
        let wave = sine_wave(1000, 11.0);
        let first = compute_spectral_density(&wave).unwrap();
        let second = compute_spectral_density(&wave).unwrap();
        assert_eq!(first, second);
    }
}
