//! Wave synthesis: Fibonacci-weighted superposition of sine harmonics.
//!
//! Each sequence index `i` is assigned the frequency `i * frequency_scale`;
//! the wave at time `t` is the sum of every harmonic weighted by its
//! Fibonacci value, scaled by a common amplitude factor.

use std::f64::consts::PI;

/// Number of sample points in the reference domain.
pub const DOMAIN_POINTS: usize = 1000;

/// Start of the reference domain, in time units.
pub const DOMAIN_START: f64 = 0.0;

/// End of the reference domain, in time units.
pub const DOMAIN_END: f64 = 10.0;

/// Fixed ordered set of time points at which the wave is evaluated.
///
/// Evenly spaced with inclusive endpoints, immutable once built. Independent
/// of every other parameter: changing iterations or scales never changes the
/// domain.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleDomain {
    times: Vec<f64>,
}

impl SampleDomain {
    /// Evenly spaced `count` points from `start` to `end`, endpoints included.
    pub fn new(count: usize, start: f64, end: f64) -> Self {
        let times = match count {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (end - start) / (count - 1) as f64;
                (0..count).map(|i| start + step * i as f64).collect()
            }
        };
        Self { times }
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

impl Default for SampleDomain {
    /// The reference configuration: 1000 points over [0, 10].
    fn default() -> Self {
        Self::new(DOMAIN_POINTS, DOMAIN_START, DOMAIN_END)
    }
}

/// Scalar synthesis parameters.
///
/// A plain value struct owned by the caller; the core holds no parameter
/// state of its own. The two scalars are independent, with no
/// cross-validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthesisParams {
    /// Scales each harmonic's frequency: harmonic `i` plays at `i * frequency_scale`.
    pub frequency_scale: f64,
    /// Uniform amplitude multiplier applied to the whole superposition.
    pub wave_complexity: f64,
}

impl Default for SynthesisParams {
    fn default() -> Self {
        Self {
            frequency_scale: 1.0,
            wave_complexity: 1.0,
        }
    }
}

/// Evaluate the Fibonacci-weighted sine superposition at every domain point.
///
/// `wave(t) = wave_complexity * Σ_i seq[i] * sin(2π · i · frequency_scale · t)`
///
/// Every harmonic contributes at every sample. A `frequency_scale` of zero
/// collapses every harmonic to 0 Hz, so the wave is identically zero no
/// matter the sequence or complexity. Deterministic: identical inputs yield
/// bit-identical output.
pub fn synthesize_wave(
    sequence: &[i64],
    domain: &SampleDomain,
    params: &SynthesisParams,
) -> Vec<f64> {
    domain
        .times()
        .iter()
        .map(|&t| {
            let superposition: f64 = sequence
                .iter()
                .enumerate()
                .map(|(i, &weight)| {
                    let freq = i as f64 * params.frequency_scale;
                    weight as f64 * (2.0 * PI * freq * t).sin()
                })
                .sum();
            params.wave_complexity * superposition
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::generate_sequence;

    #[test]
    fn test_domain_reference_configuration() {
        let domain = SampleDomain::default();
        assert_eq!(domain.len(), 1000);
        assert_eq!(domain.times()[0], 0.0);
        assert_eq!(*domain.times().last().unwrap(), 10.0);
    }

    #[test]
    fn test_domain_evenly_spaced() {
        let domain = SampleDomain::new(11, 0.0, 1.0);
        for (i, &t) in domain.times().iter().enumerate() {
            assert!((t - i as f64 * 0.1).abs() < 1e-12);
        }
    }

    #[test]
    fn test_wave_length_matches_domain() {
        let seq = generate_sequence(10).unwrap();
        let domain = SampleDomain::default();
        let wave = synthesize_wave(&seq, &domain, &SynthesisParams::default());
        assert_eq!(wave.len(), domain.len());
    }

    #[test]
    fn test_wave_starts_at_zero() {
        // sin(0) = 0 for every harmonic, regardless of weights
        let seq = generate_sequence(30).unwrap();
        let domain = SampleDomain::default();
        let params = SynthesisParams {
            frequency_scale: 2.5,
            wave_complexity: 3.0,
        };
        let wave = synthesize_wave(&seq, &domain, &params);
        assert_eq!(wave[0], 0.0);
    }

    #[test]
    fn test_two_element_sequence_is_single_sine() {
        // seq = [0, 1]: only the i=1 harmonic survives
        let seq = generate_sequence(2).unwrap();
        let domain = SampleDomain::new(100, 0.0, 1.0);
        let params = SynthesisParams {
            frequency_scale: 0.7,
            wave_complexity: 2.5,
        };
        let wave = synthesize_wave(&seq, &domain, &params);
        for (&t, &sample) in domain.times().iter().zip(wave.iter()) {
            let expected = 2.5 * (2.0 * PI * 0.7 * t).sin();
            assert!(
                (sample - expected).abs() < 1e-12,
                "at t={}: got {}, expected {}",
                t,
                sample,
                expected
            );
        }
    }

    #[test]
    fn test_zero_frequency_scale_is_silent() {
        let seq = generate_sequence(20).unwrap();
        let domain = SampleDomain::default();
        let params = SynthesisParams {
            frequency_scale: 0.0,
            wave_complexity: 4.2,
        };
        let wave = synthesize_wave(&seq, &domain, &params);
        assert!(wave.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_synthesis_is_pure() {
        let seq = generate_sequence(25).unwrap();
        let domain = SampleDomain::default();
        let params = SynthesisParams {
            frequency_scale: 1.3,
            wave_complexity: 0.8,
        };
        let first = synthesize_wave(&seq, &domain, &params);
        let second = synthesize_wave(&seq, &domain, &params);
        assert_eq!(first, second, "repeated calls must be bit-identical");
    }

    #[test]
    fn test_complexity_scales_amplitude() {
        let seq = generate_sequence(8).unwrap();
        let domain = SampleDomain::new(64, 0.0, 1.0);
        let base = synthesize_wave(
            &seq,
            &domain,
            &SynthesisParams {
                frequency_scale: 1.0,
                wave_complexity: 1.0,
            },
        );
        let doubled = synthesize_wave(
            &seq,
            &domain,
            &SynthesisParams {
                frequency_scale: 1.0,
                wave_complexity: 2.0,
            },
        );
        for (a, b) in base.iter().zip(doubled.iter()) {
            assert!((b - 2.0 * a).abs() < 1e-9);
        }
    }
}
