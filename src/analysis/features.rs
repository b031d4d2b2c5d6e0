//! Short-term scalar features: energy, volume, and zero-crossing rate.

use crate::analysis::pitch;
use crate::types::{FeatureSet, Frame, Signal};

/// Mean squared amplitude over a sample range. Returns 0.0 for an empty
/// range; callers that need to distinguish "no data" should short-circuit
/// on an empty frame first.
pub fn short_term_energy(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f64 = samples.iter().map(|&s| s as f64 * s as f64).sum();
    (sum / samples.len() as f64) as f32
}

/// RMS amplitude: the square root of the short-term energy.
pub fn volume(samples: &[f32]) -> f32 {
    short_term_energy(samples).sqrt()
}

/// Sign changes per sample over a range.
///
/// A crossing is counted only between samples of strictly opposite sign;
/// an exact zero neither counts as a crossing nor resets the reference
/// sign. The count is normalized by the range length so values are
/// comparable across frame sizes.
pub fn zero_crossing_rate(samples: &[f32]) -> f32 {
    if samples.len() < 2 {
        return 0.0;
    }

    let mut crossings = 0usize;
    let mut reference_sign = 0i8;
    for &sample in samples {
        let sign = if sample > 0.0 {
            1
        } else if sample < 0.0 {
            -1
        } else {
            0
        };
        if sign == 0 {
            continue;
        }
        if reference_sign != 0 && sign != reference_sign {
            crossings += 1;
        }
        reference_sign = sign;
    }

    crossings as f32 / samples.len() as f32
}

/// Maximum absolute amplitude over the whole signal. Reporting aid only;
/// classification thresholds compare against RMS volume instead.
pub fn peak_volume(signal: &Signal) -> f32 {
    signal
        .samples()
        .iter()
        .fold(0.0_f32, |peak, &sample| peak.max(sample.abs()))
}

/// Compute the full per-frame feature set, or `None` for an empty frame.
pub fn compute_features(signal: &Signal, frame: Frame) -> Option<FeatureSet> {
    if frame.is_empty() {
        return None;
    }

    let range = frame.samples(signal);
    let energy = short_term_energy(range);
    Some(FeatureSet {
        volume: energy.sqrt(),
        energy,
        zero_crossing_rate: zero_crossing_rate(range),
        fundamental_hz: pitch::estimate_f0(range, signal.sample_rate()),
    })
}
