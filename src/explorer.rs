//! Full pipeline: settings in, four fresh outputs out.
//!
//! Any parameter change invalidates every derived output, so [`Snapshot`]
//! always recomputes all four stages from scratch. Nothing is cached between
//! calls; each compute is a pure derivation of (settings, domain).

use std::ops::RangeInclusive;

use serde::Serialize;
use tracing::debug;

use crate::decomposition::decompose_harmonics;
use crate::error::ExplorerError;
use crate::sequence::generate_sequence;
use crate::spectrum::{compute_spectral_density, SpectralDensity};
use crate::synthesis::{synthesize_wave, SampleDomain, SynthesisParams};

/// Iteration range of the reference configuration.
pub const ITERATIONS_RANGE: RangeInclusive<usize> = 5..=50;

/// Frequency-scale range of the reference configuration.
pub const FREQUENCY_SCALE_RANGE: RangeInclusive<f64> = 0.1..=5.0;

/// Wave-complexity range of the reference configuration.
pub const WAVE_COMPLEXITY_RANGE: RangeInclusive<f64> = 0.1..=5.0;

/// The current parameter set, owned by the caller.
///
/// An immutable value struct: the computation core never stores or mutates
/// settings. Defaults match the reference configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExplorerSettings {
    pub iterations: usize,
    pub frequency_scale: f64,
    pub wave_complexity: f64,
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        Self {
            iterations: 20,
            frequency_scale: 1.0,
            wave_complexity: 1.0,
        }
    }
}

impl ExplorerSettings {
    pub fn synthesis_params(&self) -> SynthesisParams {
        SynthesisParams {
            frequency_scale: self.frequency_scale,
            wave_complexity: self.wave_complexity,
        }
    }
}

/// The four outputs of one full recomputation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub sequence: Vec<i64>,
    pub wave: Vec<f64>,
    pub decomposed: Vec<f64>,
    pub spectrum: SpectralDensity,
}

impl Snapshot {
    /// Run all four stages eagerly and return their results together.
    ///
    /// Single-threaded and synchronous; every stage receives its inputs as
    /// parameters and returns a fresh value. A failed precondition surfaces
    /// immediately with no partial result.
    pub fn compute(
        settings: &ExplorerSettings,
        domain: &SampleDomain,
    ) -> Result<Self, ExplorerError> {
        let sequence = generate_sequence(settings.iterations)?;
        debug!(iterations = settings.iterations, "sequence generated");

        let wave = synthesize_wave(&sequence, domain, &settings.synthesis_params());
        debug!(samples = wave.len(), "wave synthesized");

        let decomposed = decompose_harmonics(&wave);
        let spectrum = compute_spectral_density(&wave)?;
        debug!(bins = spectrum.len(), "spectral density computed");

        Ok(Self {
            sequence,
            wave,
            decomposed,
            spectrum,
        })
    }
}
