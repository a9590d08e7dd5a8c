//! # Fibwave - Fibonacci Wave Explorer Core
//!
//! Fibwave synthesizes a deterministic multi-tone signal driven by the
//! Fibonacci sequence, decomposes it through spectral windowing, and computes
//! its frequency-domain density. It is a pure computation library: the
//! interactive surface (plots, sliders) lives in the host application and
//! only parameterizes and displays what this crate computes.
//!
//! ## Pipeline
//!
//! Four stages, composed linearly. Each consumes the previous stage's
//! output:
//!
//! 1. [`sequence::generate_sequence`] - Fibonacci sequence of a requested length
//! 2. [`synthesis::synthesize_wave`] - Fibonacci-weighted sine superposition
//! 3. [`decomposition::decompose_harmonics`] - three-window smoothing ensemble
//! 4. [`spectrum::compute_spectral_density`] - log-compressed FFT magnitude spectrum
//!
//! Every stage is a pure function: no hidden state, no caching, bit-identical
//! results for identical inputs. A parameter change invalidates everything
//! downstream, so recomputation is always a full replace.
//!
//! ## Quick Start
//!
//! ```rust
//! use fibwave::explorer::{ExplorerSettings, Snapshot};
//! use fibwave::synthesis::SampleDomain;
//!
//! let settings = ExplorerSettings::default(); // 20 iterations, scales at 1.0
//! let domain = SampleDomain::default();       // 1000 points over [0, 10]
//!
//! let snapshot = Snapshot::compute(&settings, &domain).unwrap();
//! assert_eq!(snapshot.sequence[..5], [0, 1, 1, 2, 3]);
//! assert_eq!(snapshot.wave.len(), 1000);
//! assert!(snapshot.spectrum.len() <= 500);
//! ```
//!
//! Individual stages can be driven directly:
//!
//! ```rust
//! use fibwave::sequence::generate_sequence;
//! use fibwave::synthesis::{synthesize_wave, SampleDomain, SynthesisParams};
//!
//! let seq = generate_sequence(8).unwrap();
//! let domain = SampleDomain::new(256, 0.0, 4.0);
//! let wave = synthesize_wave(&seq, &domain, &SynthesisParams::default());
//! assert_eq!(wave.len(), 256);
//! ```
//!
//! ## Concurrency
//!
//! Single-threaded and synchronous throughout. Callers that want concurrent
//! parameter updates must serialize them externally; the core exposes no
//! internal locking and assumes one parameter change is fully processed
//! before the next is accepted.

pub mod decomposition;
pub mod error;
pub mod explorer;
pub mod sequence;
pub mod spectrum;
pub mod synthesis;
