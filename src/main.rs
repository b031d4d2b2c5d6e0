use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

use sonalyzer::analysis;
use sonalyzer::audio;
use sonalyzer::types::{FeatureSet, Frame, SegmentationConfig, SegmentationResult};

/// Sonalyzer - sound analysis tool
///
/// Decodes an audio file and reports short-term features (volume, energy,
/// zero-crossing rate, fundamental frequency) for a chosen frame, plus a
/// whole-signal silence / voiced / unvoiced segmentation.
#[derive(Parser, Debug)]
#[command(name = "sonalyzer")]
#[command(version = "0.1.0")]
#[command(about = "Sound analysis tool", long_about = None)]
struct Args {
    /// Input audio file path (WAV, FLAC, MP3, OGG, etc.)
    #[arg(value_name = "INPUT")]
    input_file: PathBuf,

    /// Frame start as a fraction of the signal, 0.0 - 1.0
    #[arg(long, default_value_t = 0.0)]
    frame_start: f64,

    /// Frame duration in milliseconds
    #[arg(long, default_value_t = 30.0)]
    frame_duration_ms: f64,

    /// Minimum RMS volume for a frame to count as non-silent
    #[arg(long)]
    silence_threshold: Option<f32>,

    /// Maximum zero-crossing rate (per sample) for a voiced frame
    #[arg(long)]
    zcr_threshold: Option<f32>,

    /// Emit the full report as JSON instead of text
    #[arg(long)]
    json: bool,
}

impl Args {
    /// Validate CLI arguments
    fn validate(&self) -> Result<()> {
        if !self.input_file.exists() {
            anyhow::bail!("Input file does not exist: {:?}", self.input_file);
        }

        if !self.input_file.is_file() {
            anyhow::bail!("Input path is not a file: {:?}", self.input_file);
        }

        if self.frame_duration_ms <= 0.0 {
            anyhow::bail!(
                "Frame duration must be positive, got: {}",
                self.frame_duration_ms
            );
        }

        if !(0.0..=1.0).contains(&self.frame_start) {
            anyhow::bail!(
                "Frame start must be within 0.0 - 1.0, got: {}",
                self.frame_start
            );
        }

        if let Some(threshold) = self.silence_threshold {
            if threshold < 0.0 {
                anyhow::bail!("Silence threshold must be non-negative, got: {}", threshold);
            }
        }

        if let Some(threshold) = self.zcr_threshold {
            if threshold < 0.0 {
                anyhow::bail!("ZCR threshold must be non-negative, got: {}", threshold);
            }
        }

        Ok(())
    }

    fn segmentation_config(&self) -> SegmentationConfig {
        let mut config = SegmentationConfig::default();
        if let Some(threshold) = self.silence_threshold {
            config.silence_threshold = threshold;
        }
        if let Some(threshold) = self.zcr_threshold {
            config.zcr_threshold = threshold;
        }
        config
    }
}

#[derive(Serialize)]
struct AnalysisReport {
    sample_rate: u32,
    sample_count: usize,
    duration_seconds: f64,
    peak_volume: f32,
    frame: Frame,
    features: Option<FeatureSet>,
    segmentation: SegmentationResult,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    args.validate()
        .context("Failed to validate command-line arguments")?;

    let signal = audio::decoder::decode_audio(&args.input_file)
        .context("Failed to decode input audio")?;

    let frame = analysis::extract_frame(&signal, args.frame_start, args.frame_duration_ms)
        .context("Failed to extract analysis frame")?;
    let features = analysis::compute_features(&signal, frame);
    let segmentation = analysis::segment(&signal, args.segmentation_config());

    let report = AnalysisReport {
        sample_rate: signal.sample_rate(),
        sample_count: signal.len(),
        duration_seconds: signal.duration_seconds(),
        peak_volume: analysis::peak_volume(&signal),
        frame,
        features,
        segmentation,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&args, &report);
    Ok(())
}

fn print_report(args: &Args, report: &AnalysisReport) {
    println!("Sonalyzer v0.1.0 - Sound Analysis Tool");
    println!("Input: {:?}", args.input_file);
    println!(
        "Sample rate: {} Hz, {} samples, duration {:.3} s, peak volume {:.4}",
        report.sample_rate, report.sample_count, report.duration_seconds, report.peak_volume
    );

    println!(
        "\nFrame [{}, {}) (start {:.2}, duration {} ms):",
        report.frame.start, report.frame.end, args.frame_start, args.frame_duration_ms
    );
    match &report.features {
        Some(features) => {
            println!("  Volume: {:.6}", features.volume);
            println!("  STE:    {:.6}", features.energy);
            println!("  ZCR:    {:.6}", features.zero_crossing_rate);
            println!("  F0:     {:.2} Hz", features.fundamental_hz);
        }
        None => println!("  (empty frame - no features)"),
    }

    println!("\nSegmentation:");
    println!("  Silence ratio: {:.4}", report.segmentation.silence_ratio);
    print_intervals("Silence", &report.segmentation.silence, report.sample_rate);
    print_intervals("Voiced", &report.segmentation.voiced, report.sample_rate);
    print_intervals("Unvoiced", &report.segmentation.unvoiced, report.sample_rate);
}

fn print_intervals(label: &str, intervals: &[sonalyzer::types::Interval], sample_rate: u32) {
    println!("  {} intervals: {}", label, intervals.len());
    for interval in intervals {
        println!(
            "    [{:>8}, {:>8})  {:.3}s - {:.3}s",
            interval.start,
            interval.end,
            interval.start as f64 / sample_rate as f64,
            interval.end as f64 / sample_rate as f64
        );
    }
}
