//! Harmonic decomposition: a multi-window smoothing ensemble.
//!
//! Not filtering in the frequency sense. The wave is tapered elementwise by
//! three classic windows with different roll-off steepness (Hann, Hamming,
//! Blackman) and the three variants are averaged with equal weight,
//! de-emphasizing edge effects.

use std::f64::consts::PI;

/// Hann window: `0.5 * (1 - cos(2πi / (n-1)))`, tapering to exactly zero at
/// both ends.
pub fn hann_window(len: usize) -> Vec<f64> {
    symmetric_window(len, |phase| 0.5 * (1.0 - phase.cos()))
}

/// Hamming window: `0.54 - 0.46·cos(2πi / (n-1))`, tapering to 0.08 at the
/// ends rather than zero.
pub fn hamming_window(len: usize) -> Vec<f64> {
    symmetric_window(len, |phase| 0.54 - 0.46 * phase.cos())
}

/// Blackman window: `0.42 - 0.5·cos(2πi/(n-1)) + 0.08·cos(4πi/(n-1))`, the
/// steepest roll-off of the three.
pub fn blackman_window(len: usize) -> Vec<f64> {
    symmetric_window(len, |phase| {
        0.42 - 0.5 * phase.cos() + 0.08 * (2.0 * phase).cos()
    })
}

/// Evaluate a symmetric taper over `len` points; `shape` receives the phase
/// `2πi / (len-1)`.
fn symmetric_window(len: usize, shape: impl Fn(f64) -> f64) -> Vec<f64> {
    match len {
        0 => Vec::new(),
        1 => vec![1.0],
        _ => (0..len)
            .map(|i| shape(2.0 * PI * i as f64 / (len - 1) as f64))
            .collect(),
    }
}

/// Taper the wave by each of the three windows and average the variants.
///
/// Output has the same length as the input; window length is derived from the
/// wave itself, so no mismatch is possible. Since every window weight lies in
/// [0, 1], the result is bounded by the input's peak magnitude.
pub fn decompose_harmonics(wave: &[f64]) -> Vec<f64> {
    let windows = [
        hann_window(wave.len()),
        hamming_window(wave.len()),
        blackman_window(wave.len()),
    ];
    wave.iter()
        .enumerate()
        .map(|(i, &sample)| {
            let sum: f64 = windows.iter().map(|w| sample * w[i]).sum();
            sum / windows.len() as f64
        })
        .collect()
}
