//! Core types for the sonalyzer analysis engine

use serde::Serialize;

use crate::analysis::{AnalysisError, Result};

/// A decoded mono recording: normalized f32 samples plus a sample rate.
///
/// Samples are produced once at load time and are read-only afterwards;
/// every analysis function borrows them immutably.
#[derive(Debug, Clone)]
pub struct Signal {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl Signal {
    /// Wrap already-normalized mono samples.
    pub fn from_mono(samples: Vec<f32>, sample_rate: u32) -> Result<Self> {
        if sample_rate == 0 {
            return Err(AnalysisError::invalid_input("sample rate must be positive"));
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Build a signal from raw interleaved 16-bit little-endian PCM.
    ///
    /// Samples are normalized by `i16::MAX` and, when more than one channel
    /// is interleaved, channel 0 is selected (never averaged) so the result
    /// is deterministic regardless of what the other channels hold.
    pub fn from_interleaved_pcm(
        bytes: &[u8],
        channel_count: u16,
        sample_rate: u32,
    ) -> Result<Self> {
        if sample_rate == 0 {
            return Err(AnalysisError::invalid_input("sample rate must be positive"));
        }
        if channel_count == 0 {
            return Err(AnalysisError::invalid_input("channel count must be positive"));
        }
        let frame_bytes = 2 * channel_count as usize;
        if bytes.len() % frame_bytes != 0 {
            return Err(AnalysisError::invalid_input(format!(
                "PCM buffer of {} bytes is not a multiple of the {}-byte frame size",
                bytes.len(),
                frame_bytes
            )));
        }

        let scale = 1.0 / i16::MAX as f32;
        let samples = bytes
            .chunks_exact(frame_bytes)
            .map(|frame| i16::from_le_bytes([frame[0], frame[1]]) as f32 * scale)
            .collect();

        Ok(Self {
            samples,
            sample_rate,
        })
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds, derived from sample count and rate.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// A contiguous sample range `[start, end)` of one signal.
///
/// An empty frame (start == end) is a legal "no data" value; feature
/// computation over it yields `None` rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub start: usize,
    pub end: usize,
}

impl Frame {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Borrow the frame's samples from its signal.
    pub fn samples<'a>(&self, signal: &'a Signal) -> &'a [f32] {
        &signal.samples()[self.start..self.end]
    }
}

/// Short-term features computed for one frame.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FeatureSet {
    /// RMS amplitude (square root of `energy`).
    pub volume: f32,
    /// Short-term energy: mean squared amplitude.
    pub energy: f32,
    /// Sign changes per sample within the frame.
    pub zero_crossing_rate: f32,
    /// Estimated fundamental frequency in Hz; 0.0 when no pitch was found.
    pub fundamental_hz: f32,
}

/// A maximal run of same-class frames, as sample indices (end exclusive).
///
/// Boundaries align to analysis-frame boundaries, never to arbitrary sample
/// positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub start: usize,
    pub end: usize,
}

impl Interval {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Thresholds for silence / voiced / unvoiced classification.
///
/// Defaults are calibrated constants held stable across runs so segmentation
/// results stay reproducible: a frame is silent below an RMS of 0.02, and a
/// non-silent frame is voiced below 0.10 crossings per sample.
#[derive(Debug, Clone, Copy)]
pub struct SegmentationConfig {
    /// Minimum RMS volume for a frame to count as non-silent.
    pub silence_threshold: f32,
    /// Maximum zero-crossing rate for a non-silent frame to count as voiced.
    pub zcr_threshold: f32,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            silence_threshold: 0.02,
            zcr_threshold: 0.10,
        }
    }
}

/// Whole-signal segmentation: a silence ratio plus ordered, disjoint interval
/// lists that together cover every analyzed frame exactly once.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SegmentationResult {
    /// Silent duration over total duration, in [0, 1]; 0 for an empty signal.
    pub silence_ratio: f64,
    pub silence: Vec<Interval>,
    pub voiced: Vec<Interval>,
    pub unvoiced: Vec<Interval>,
}
