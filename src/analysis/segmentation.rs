//! Whole-signal silence / voiced / unvoiced segmentation.

use tracing::debug;

use crate::analysis::features;
use crate::types::{Interval, SegmentationConfig, SegmentationResult, Signal};

/// Analysis frame duration for wall-to-wall segmentation. Non-overlapping
/// frames of this length step from sample 0 until the signal is exhausted;
/// a final partial frame is analyzed when non-empty.
const FRAME_DURATION_MS: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameClass {
    Silence,
    Voiced,
    Unvoiced,
}

/// Classify every analysis frame of a signal and merge same-class runs.
///
/// A frame is silent when its RMS volume falls below
/// `config.silence_threshold`; a non-silent frame is voiced when its
/// zero-crossing rate falls below `config.zcr_threshold` and unvoiced
/// otherwise. Adjacent frames of one class always merge into a single
/// interval, so the three lists are ordered, disjoint, and cover every
/// analyzed frame exactly once. The silence ratio is silent duration over
/// total duration, 0 for an empty signal.
pub fn segment(signal: &Signal, config: SegmentationConfig) -> SegmentationResult {
    let total = signal.len();
    if total == 0 {
        return SegmentationResult::default();
    }

    let frame_len = ((FRAME_DURATION_MS / 1000.0) * signal.sample_rate() as f64)
        .round()
        .max(1.0) as usize;

    let mut result = SegmentationResult::default();
    let mut current: Option<(FrameClass, Interval)> = None;
    let mut silent_samples = 0usize;

    let mut start = 0usize;
    while start < total {
        let end = (start + frame_len).min(total);
        let range = &signal.samples()[start..end];
        let class = classify(range, config);
        if class == FrameClass::Silence {
            silent_samples += end - start;
        }

        match current.as_mut() {
            Some((open_class, interval)) if *open_class == class => interval.end = end,
            _ => {
                if let Some(run) = current.take() {
                    push_run(&mut result, run);
                }
                current = Some((class, Interval { start, end }));
            }
        }
        start = end;
    }
    if let Some(run) = current {
        push_run(&mut result, run);
    }

    result.silence_ratio = silent_samples as f64 / total as f64;
    debug!(
        silence = result.silence.len(),
        voiced = result.voiced.len(),
        unvoiced = result.unvoiced.len(),
        silence_ratio = result.silence_ratio,
        "segmented signal"
    );
    result
}

fn classify(range: &[f32], config: SegmentationConfig) -> FrameClass {
    if features::volume(range) < config.silence_threshold {
        FrameClass::Silence
    } else if features::zero_crossing_rate(range) < config.zcr_threshold {
        FrameClass::Voiced
    } else {
        FrameClass::Unvoiced
    }
}

fn push_run(result: &mut SegmentationResult, (class, interval): (FrameClass, Interval)) {
    match class {
        FrameClass::Silence => result.silence.push(interval),
        FrameClass::Voiced => result.voiced.push(interval),
        FrameClass::Unvoiced => result.unvoiced.push(interval),
    }
}
