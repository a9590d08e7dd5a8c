//! Command-line report over the wave explorer pipeline.
//!
//! Runs one full recomputation for the given parameters and prints a summary
//! to stdout. Nothing is written to disk.

use clap::Parser;
use serde::Serialize;
use tracing::info;

use fibwave::explorer::{
    ExplorerSettings, Snapshot, FREQUENCY_SCALE_RANGE, ITERATIONS_RANGE, WAVE_COMPLEXITY_RANGE,
};
use fibwave::synthesis::SampleDomain;

#[derive(Parser)]
#[command(
    name = "wave_report",
    about = "Synthesize a Fibonacci-driven wave and report its spectral density"
)]
struct Args {
    /// Length of the Fibonacci sequence (reference range 5-50)
    #[arg(long, default_value_t = 20)]
    iterations: usize,

    /// Harmonic frequency multiplier (reference range 0.1-5.0)
    #[arg(long, default_value_t = 1.0)]
    frequency_scale: f64,

    /// Uniform amplitude multiplier (reference range 0.1-5.0)
    #[arg(long, default_value_t = 1.0)]
    complexity: f64,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    settings: ExplorerSettings,
    sequence_head: Vec<i64>,
    sequence_len: usize,
    wave_samples: usize,
    wave_peak: f64,
    wave_rms: f64,
    decomposed_peak: f64,
    spectrum_bins: usize,
    dominant_frequency: Option<f64>,
}

impl Report {
    fn from_snapshot(settings: ExplorerSettings, snapshot: &Snapshot) -> Self {
        Self {
            settings,
            sequence_head: snapshot.sequence.iter().take(8).copied().collect(),
            sequence_len: snapshot.sequence.len(),
            wave_samples: snapshot.wave.len(),
            wave_peak: peak(&snapshot.wave),
            wave_rms: rms(&snapshot.wave),
            decomposed_peak: peak(&snapshot.decomposed),
            spectrum_bins: snapshot.spectrum.len(),
            dominant_frequency: snapshot.spectrum.dominant_frequency(),
        }
    }

    fn format_report(&self) -> String {
        let mut report = String::new();

        report.push_str("=== Fibonacci Wave Report ===\n");
        report.push_str(&format!(
            "Iterations:      {}\n",
            self.settings.iterations
        ));
        report.push_str(&format!(
            "Frequency Scale: {:.2}\n",
            self.settings.frequency_scale
        ));
        report.push_str(&format!(
            "Complexity:      {:.2}\n",
            self.settings.wave_complexity
        ));
        report.push('\n');

        report.push_str("[Sequence]\n");
        report.push_str(&format!("Length: {}\n", self.sequence_len));
        report.push_str(&format!("Head:   {:?}\n", self.sequence_head));
        report.push('\n');

        report.push_str("[Wave]\n");
        report.push_str(&format!("Samples:    {}\n", self.wave_samples));
        report.push_str(&format!("Peak:       {:.4}\n", self.wave_peak));
        report.push_str(&format!("RMS:        {:.4}\n", self.wave_rms));
        report.push_str(&format!("Decomposed: {:.4} peak\n", self.decomposed_peak));
        report.push('\n');

        report.push_str("[Spectrum]\n");
        report.push_str(&format!("Bins: {}\n", self.spectrum_bins));
        match self.dominant_frequency {
            Some(freq) => report.push_str(&format!("Dominant Freq: {:.4}\n", freq)),
            None => report.push_str("Dominant Freq: (none)\n"),
        }

        report
    }
}

fn peak(values: &[f64]) -> f64 {
    values.iter().map(|v| v.abs()).fold(0.0, f64::max)
}

fn rms(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: f64 = values.iter().map(|v| v * v).sum();
    (sum / values.len() as f64).sqrt()
}

fn validate(args: &Args) -> Result<(), String> {
    if !ITERATIONS_RANGE.contains(&args.iterations) {
        return Err(format!(
            "iterations must be in {:?}, got {}",
            ITERATIONS_RANGE, args.iterations
        ));
    }
    if !args.frequency_scale.is_finite() || !FREQUENCY_SCALE_RANGE.contains(&args.frequency_scale) {
        return Err(format!(
            "frequency-scale must be in {:?}, got {}",
            FREQUENCY_SCALE_RANGE, args.frequency_scale
        ));
    }
    if !args.complexity.is_finite() || !WAVE_COMPLEXITY_RANGE.contains(&args.complexity) {
        return Err(format!(
            "complexity must be in {:?}, got {}",
            WAVE_COMPLEXITY_RANGE, args.complexity
        ));
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(msg) = validate(&args) {
        eprintln!("Error: {msg}");
        std::process::exit(1);
    }

    let settings = ExplorerSettings {
        iterations: args.iterations,
        frequency_scale: args.frequency_scale,
        wave_complexity: args.complexity,
    };
    let domain = SampleDomain::default();

    info!(
        iterations = settings.iterations,
        frequency_scale = settings.frequency_scale,
        wave_complexity = settings.wave_complexity,
        "computing snapshot"
    );

    match Snapshot::compute(&settings, &domain) {
        Ok(snapshot) => {
            let report = Report::from_snapshot(settings, &snapshot);
            if args.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("Error serializing report: {e}");
                        std::process::exit(2);
                    }
                }
            } else {
                println!("{}", report.format_report());
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    }
}
